use super::text_width;
use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;

/// Drop-down picker. The caller owns both the selected index and whether the list is open.
///
/// The header row emits `on_toggle`. While open, one row per item follows below the header and
/// emits `on_select(index)`; callers usually close the list when handling that message.
pub struct ComboButton<'a, M, F> {
    items: &'a [String],
    selected: usize,
    open: bool,
    on_toggle: M,
    on_select: F,
}

impl<'a, M, F> ComboButton<'a, M, F>
where
    F: Fn(usize) -> M,
{
    pub fn new(
        items: &'a [String],
        selected: usize,
        open: bool,
        on_toggle: M,
        on_select: F,
    ) -> Self {
        Self {
            items,
            selected,
            open,
            on_toggle,
            on_select,
        }
    }

    /// Columns needed to show the widest item plus the arrow.
    pub fn width(&self) -> u16 {
        self.items.iter().map(|s| text_width(s)).max().unwrap_or(0) + 4
    }

    /// Rows needed: the header, plus the items while open.
    pub fn height(&self) -> u16 {
        if self.open {
            1 + self.items.len().min(u16::MAX as usize - 1) as u16
        } else {
            1
        }
    }

    pub fn render<H: Host<M>>(self, area: Rect, host: &mut H, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = self.width().min(area.width);
        let header = Rect::new(area.x, area.y, width, 1);
        let current = self
            .items
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default();
        let arrow = if self.open { "▴" } else { "▾" };
        let line = Line::from(vec![
            Span::raw(current.to_string()),
            Span::raw(" "),
            Span::styled(arrow, theme.text_muted),
        ]);
        host.clickable(
            header,
            &Visual::new(line).styled(theme.outline).padded(1),
            self.on_toggle,
        );

        if !self.open {
            return;
        }
        let rows = area.height - 1;
        for (i, item) in self.items.iter().enumerate().take(rows as usize) {
            let style = if i == self.selected {
                theme.item_active
            } else {
                theme.item
            };
            host.clickable(
                Rect::new(area.x, area.y + 1 + i as u16, width, 1),
                &Visual::new(item.clone()).styled(style).padded(1),
                (self.on_select)(i),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseEvent;
    use crate::render::row_text;
    use crate::surface::HitMap;
    use crate::surface::Surface;
    use ratatui::buffer::Buffer;

    #[derive(Clone, Debug, PartialEq)]
    enum Msg {
        Toggle,
        Pick(usize),
    }

    fn items() -> Vec<String> {
        (0..3).map(|i| format!("Item {i}")).collect()
    }

    #[test]
    fn closed_combo_shows_selection_only() {
        let items = items();
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        let combo = ComboButton::new(&items, 1, false, Msg::Toggle, Msg::Pick);
        assert_eq!(combo.height(), 1);
        combo.render(area, &mut Surface::new(&mut buf, &mut hits), &Theme::default());
        assert_eq!(row_text(&buf, area, 0), " Item 1 ▾   ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.resolve(&MouseEvent::click(2, 0)), Some(Msg::Toggle));
    }

    #[test]
    fn open_combo_lists_items() {
        let items = items();
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        let combo = ComboButton::new(&items, 0, true, Msg::Toggle, Msg::Pick);
        assert_eq!(combo.height(), 4);
        combo.render(area, &mut Surface::new(&mut buf, &mut hits), &Theme::default());
        assert_eq!(row_text(&buf, area, 0), " Item 0 ▴   ");
        assert_eq!(row_text(&buf, area, 3), " Item 2     ");
        assert_eq!(hits.resolve(&MouseEvent::click(1, 2)), Some(Msg::Pick(1)));
    }

    #[test]
    fn out_of_range_selection_renders_blank_header() {
        let items = items();
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        ComboButton::new(&items, 9, false, Msg::Toggle, Msg::Pick)
            .render(area, &mut Surface::new(&mut buf, &mut hits), &Theme::default());
        assert_eq!(row_text(&buf, area, 0), "  ▾         ");
    }
}
