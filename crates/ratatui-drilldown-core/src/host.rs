//! The two rendering capabilities components require from their host.
//!
//! Components describe *what* to draw as a [`Visual`] and *where* as a [`Rect`]. The host decides
//! how a visual looks on screen and, for clickable regions, arranges for the supplied message to
//! come back exactly once per activation. [`crate::surface::Surface`] is the ratatui host; tests
//! and alternative backends can provide their own.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;

/// Visual payload passed through to the host.
///
/// Components fill it in but never read it back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visual {
    pub content: Line<'static>,
    /// Fills the whole region before `content` is drawn.
    pub style: Style,
    /// Leading blank columns before `content`.
    pub pad_left: u16,
}

impl Visual {
    pub fn new(content: impl Into<Line<'static>>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn padded(mut self, pad_left: u16) -> Self {
        self.pad_left = pad_left;
        self
    }
}

pub trait Host<M> {
    /// Draws `visual` in `area` and arranges for `on_click` to be delivered once per activation
    /// of `area`.
    fn clickable(&mut self, area: Rect, visual: &Visual, on_click: M);

    /// Draws `visual` in `area` without any interaction.
    fn container(&mut self, area: Rect, visual: &Visual);

    /// Direct access for content that draws ratatui widgets itself.
    fn buffer_mut(&mut self) -> &mut Buffer;
}
