use super::take_cols;
use super::text_width;
use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;

const SEPARATOR: &str = " › ";

/// Horizontal trail of clickable crumbs; clicking crumb `i` yields `on_click(i)`.
///
/// Crumbs that no longer fit are not drawn.
pub struct BreadcrumbBar<'a, F> {
    items: &'a [String],
    on_click: F,
}

impl<'a, F> BreadcrumbBar<'a, F> {
    pub fn new(items: &'a [String], on_click: F) -> Self {
        Self { items, on_click }
    }

    pub fn render<M, H>(self, area: Rect, host: &mut H, theme: &Theme)
    where
        H: Host<M>,
        F: Fn(usize) -> M,
    {
        let mut row = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let last = self.items.len().saturating_sub(1);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                let Some(sep) = take_cols(&mut row, text_width(SEPARATOR)) else {
                    return;
                };
                host.container(sep, &Visual::new(SEPARATOR).styled(theme.text_muted));
            }
            let Some(cell) = take_cols(&mut row, text_width(item)) else {
                return;
            };
            let style = if i == last {
                theme.text_primary
            } else {
                theme.accent
            };
            host.clickable(cell, &Visual::new(item.clone()).styled(style), (self.on_click)(i));
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

    fn crumbs() -> Vec<String> {
        ["1", "2", "3"].map(String::from).to_vec()
    }

    #[test]
    fn crumbs_are_separated_and_clickable() {
        let items = crumbs();
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        BreadcrumbBar::new(&items, |i: usize| i).render(
            area,
            &mut Surface::new(&mut buf, &mut hits),
            &Theme::default(),
        );
        assert_eq!(row_text(&buf, area, 0), "1 › 2 › 3   ");
        assert_eq!(hits.resolve(&MouseEvent::click(4, 0)), Some(1));
        assert_eq!(hits.resolve(&MouseEvent::click(2, 0)), None);
    }

    #[test]
    fn overflowing_crumbs_are_dropped() {
        let items = crumbs();
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        BreadcrumbBar::new(&items, |i: usize| i).render(
            area,
            &mut Surface::new(&mut buf, &mut hits),
            &Theme::default(),
        );
        assert_eq!(hits.len(), 2);
    }
}
