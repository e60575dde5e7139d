use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;

/// Non-interactive fill bar. Values outside `0.0..=1.0` are clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBar {
    value: f32,
}

impl ProgressBar {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn filled_cols(&self, width: u16) -> u16 {
        let v = if self.value.is_nan() {
            0.0
        } else {
            self.value.clamp(0.0, 1.0)
        };
        (v * width as f32).round() as u16
    }

    pub fn render<M, H: Host<M>>(self, area: Rect, host: &mut H, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let filled = self.filled_cols(area.width);
        let rest = area.width - filled;
        if filled > 0 {
            host.container(
                Rect::new(area.x, area.y, filled, 1),
                &Visual::new("█".repeat(filled as usize)).styled(theme.accent),
            );
        }
        if rest > 0 {
            host.container(
                Rect::new(area.x + filled, area.y, rest, 1),
                &Visual::new("░".repeat(rest as usize)).styled(theme.outline),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::row_text;
    use crate::surface::HitMap;
    use crate::surface::Surface;
    use ratatui::buffer::Buffer;

    #[test]
    fn fill_is_clamped() {
        assert_eq!(ProgressBar::new(0.5).filled_cols(10), 5);
        assert_eq!(ProgressBar::new(2.0).filled_cols(10), 10);
        assert_eq!(ProgressBar::new(-1.0).filled_cols(10), 0);
        assert_eq!(ProgressBar::new(f32::NAN).filled_cols(10), 0);
    }

    #[test]
    fn renders_filled_then_track() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        let mut hits: HitMap<()> = HitMap::new();
        ProgressBar::new(0.5).render(
            area,
            &mut Surface::new(&mut buf, &mut hits),
            &Theme::default(),
        );
        assert_eq!(row_text(&buf, area, 0), "██░░");
        assert!(hits.is_empty());
    }
}
