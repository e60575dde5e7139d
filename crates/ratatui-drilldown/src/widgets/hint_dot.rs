use super::text_width;
use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;

/// Status indicator: a muted dot when inactive, a colored captioned pill when active.
#[derive(Clone, Debug)]
pub struct HintDot<'a> {
    activated: bool,
    color: Color,
    caption: &'a str,
}

impl<'a> HintDot<'a> {
    pub fn new(activated: bool, color: Color, caption: &'a str) -> Self {
        Self {
            activated,
            color,
            caption,
        }
    }

    pub fn width(&self) -> u16 {
        if self.activated {
            text_width(self.caption) + 2
        } else {
            1
        }
    }

    /// Draws at the left of `area` and returns the remaining space to its right.
    pub fn render<M, H: Host<M>>(self, area: Rect, host: &mut H, theme: &Theme) -> Rect {
        let w = self.width().min(area.width);
        if w == 0 || area.height == 0 {
            return area;
        }
        let cell = Rect::new(area.x, area.y, w, 1);
        let visual = if self.activated {
            Visual::new(self.caption.to_string())
                .styled(Style::default().fg(Color::Black).bg(self.color))
                .padded(1)
        } else {
            Visual::new("•").styled(theme.outline)
        };
        host.container(cell, &visual);
        Rect::new(area.x + w, area.y, area.width - w, area.height)
    }
}
