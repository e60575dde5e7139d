use super::take_cols;
use super::text_width;
use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Filled,
    Outline,
}

/// A single-row push button.
#[derive(Clone, Debug)]
pub struct Button<'a, M> {
    caption: &'a str,
    on_click: M,
    variant: ButtonVariant,
}

impl<'a, M> Button<'a, M> {
    pub fn new(caption: &'a str, on_click: M) -> Self {
        Self {
            caption,
            on_click,
            variant: ButtonVariant::Filled,
        }
    }

    pub fn outline(mut self) -> Self {
        self.variant = ButtonVariant::Outline;
        self
    }

    /// Columns the button occupies.
    pub fn width(&self) -> u16 {
        let w = text_width(self.caption);
        match self.variant {
            ButtonVariant::Filled => w + 2,
            ButtonVariant::Outline => w + 4,
        }
    }

    /// Draws at the left of `area` and returns the remaining space to its right.
    pub fn render<H: Host<M>>(self, mut area: Rect, host: &mut H, theme: &Theme) -> Rect {
        let Some(cell) = take_cols(&mut area, self.width()) else {
            return area;
        };
        let visual = match self.variant {
            ButtonVariant::Filled => Visual::new(self.caption.to_string())
                .styled(theme.surface)
                .padded(1),
            ButtonVariant::Outline => {
                Visual::new(format!("[ {} ]", self.caption)).styled(theme.outline)
            }
        };
        host.clickable(cell, &visual, self.on_click);
        area
    }
}
