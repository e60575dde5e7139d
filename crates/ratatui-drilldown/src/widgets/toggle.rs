use super::take_cols;
use super::text_width;
use crate::host::Host;
use crate::host::Visual;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleState {
    #[default]
    Off,
    On,
    Indeterminate,
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        if on { ToggleState::On } else { ToggleState::Off }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Indicator {
    Radio,
    Check,
}

/// Radio button, check box or tri-state check box: an indicator followed by a caption.
#[derive(Clone, Debug)]
pub struct ToggleButton<'a, M> {
    caption: &'a str,
    state: ToggleState,
    indicator: Indicator,
    on_click: M,
}

impl<'a, M> ToggleButton<'a, M> {
    pub fn radio(caption: &'a str, selected: bool, on_click: M) -> Self {
        Self {
            caption,
            state: selected.into(),
            indicator: Indicator::Radio,
            on_click,
        }
    }

    pub fn check(caption: &'a str, checked: bool, on_click: M) -> Self {
        Self {
            caption,
            state: checked.into(),
            indicator: Indicator::Check,
            on_click,
        }
    }

    pub fn tristate(caption: &'a str, state: ToggleState, on_click: M) -> Self {
        Self {
            caption,
            state,
            indicator: Indicator::Check,
            on_click,
        }
    }

    pub fn width(&self) -> u16 {
        text_width(self.caption) + 5
    }

    fn glyph(&self) -> &'static str {
        match (self.indicator, self.state) {
            (Indicator::Radio, ToggleState::Off) => "( )",
            (Indicator::Radio, _) => "(•)",
            (Indicator::Check, ToggleState::Off) => "[ ]",
            (Indicator::Check, ToggleState::On) => "[✓]",
            (Indicator::Check, ToggleState::Indeterminate) => "[■]",
        }
    }

    /// Draws at the left of `area` and returns the remaining space to its right.
    pub fn render<H: Host<M>>(self, mut area: Rect, host: &mut H, theme: &Theme) -> Rect {
        let Some(cell) = take_cols(&mut area, self.width()) else {
            return area;
        };
        let indicator_style = if self.state == ToggleState::Off {
            theme.outline
        } else {
            theme.accent
        };
        let line = Line::from(vec![
            Span::styled(self.glyph(), indicator_style),
            Span::raw(" "),
            Span::raw(self.caption.to_string()),
        ]);
        host.clickable(
            cell,
            &Visual::new(line).styled(theme.text_primary).padded(1),
            self.on_click,
        );
        area
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

    fn draw(toggle: ToggleButton<'_, u8>) -> (String, HitMap<u8>) {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        toggle.render(area, &mut Surface::new(&mut buf, &mut hits), &Theme::default());
        (row_text(&buf, area, 0), hits)
    }

    #[test]
    fn indicators_reflect_state() {
        assert_eq!(draw(ToggleButton::radio("Radio", false, 0)).0, " ( ) Radio  ");
        assert_eq!(draw(ToggleButton::radio("Radio", true, 0)).0, " (•) Radio  ");
        assert_eq!(draw(ToggleButton::check("Check", true, 0)).0, " [✓] Check  ");
        assert_eq!(
            draw(ToggleButton::tristate("Check", ToggleState::Indeterminate, 0)).0,
            " [■] Check  "
        );
    }

    #[test]
    fn whole_row_is_clickable() {
        let (_, hits) = draw(ToggleButton::check("Check", false, 9));
        assert_eq!(hits.resolve(&MouseEvent::click(7, 0)), Some(9));
        assert_eq!(hits.resolve(&MouseEvent::click(11, 0)), None);
    }
}
