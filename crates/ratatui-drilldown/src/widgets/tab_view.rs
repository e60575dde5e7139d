use super::take_cols;
use super::text_width;
use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::widgets::Widget;

/// A row of tab captions above a content area that shows the selected tab.
pub struct TabView<'a, F> {
    captions: &'a [String],
    selected: usize,
    on_select: F,
}

impl<'a, F> TabView<'a, F> {
    pub fn new(captions: &'a [String], selected: usize, on_select: F) -> Self {
        Self {
            captions,
            selected,
            on_select,
        }
    }

    /// Draws the captions on the first row of `area` and calls `content` with the selected index
    /// and the rest of the area, cleared first.
    pub fn render<M, H, C>(self, area: Rect, host: &mut H, theme: &Theme, content: C)
    where
        H: Host<M>,
        F: Fn(usize) -> M,
        C: FnOnce(usize, Rect, &mut H),
    {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut row = Rect::new(area.x, area.y, area.width, 1);
        for (i, caption) in self.captions.iter().enumerate() {
            let Some(cell) = take_cols(&mut row, text_width(caption) + 2) else {
                break;
            };
            let style = if i == self.selected {
                theme.item_active
            } else {
                theme.item
            };
            host.clickable(
                cell,
                &Visual::new(caption.clone()).styled(style).padded(1),
                (self.on_select)(i),
            );
        }

        let body = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        if !body.is_empty() {
            Clear.render(body, host.buffer_mut());
            content(self.selected, body, host);
        }
    }
}
