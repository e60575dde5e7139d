use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;

/// Horizontal slider over `0.0..=1.0`.
///
/// Every track cell is a click target that yields `on_change` with the ratio at that cell. Cells
/// mapping to the current value stay inert, so a message always means the value changed.
pub struct Slider<F> {
    value: f32,
    on_change: F,
}

impl<F> Slider<F> {
    /// # Panics
    ///
    /// If `value` is outside `0.0..=1.0`.
    pub fn new(value: f32, on_change: F) -> Self {
        assert!(
            (0.0..=1.0).contains(&value),
            "slider value {value} outside 0.0..=1.0"
        );
        Self { value, on_change }
    }

    pub fn render<M, H>(self, area: Rect, host: &mut H, theme: &Theme)
    where
        H: Host<M>,
        F: Fn(f32) -> M,
    {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let w = area.width;
        let knob = knob_col(self.value, w);
        for col in 0..w {
            let cell = Rect::new(area.x + col, area.y, 1, 1);
            let visual = if col == knob {
                Visual::new("●").styled(theme.accent)
            } else if col < knob {
                Visual::new("━").styled(theme.accent)
            } else {
                Visual::new("─").styled(theme.outline)
            };
            let ratio = ratio_at(col, w);
            if ratio == self.value {
                host.container(cell, &visual);
            } else {
                host.clickable(cell, &visual, (self.on_change)(ratio));
            }
        }
    }
}

/// Value selected by clicking column `col` of a `width`-column track.
pub fn ratio_at(col: u16, width: u16) -> f32 {
    if width <= 1 {
        return 0.0;
    }
    (col.min(width - 1) as f32 / (width - 1) as f32).clamp(0.0, 1.0)
}

/// Column the knob sits on for `value`.
pub fn knob_col(value: f32, width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    (value.clamp(0.0, 1.0) * (width - 1) as f32).round() as u16
}
