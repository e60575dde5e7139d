//! Small stateless widgets drawn through a [`Host`](crate::host::Host).
//!
//! None of these keep state between frames. Each takes the current value from the caller plus the
//! message to emit when clicked; the app updates its own state when the message comes back from
//! [`HitMap::resolve`](crate::surface::HitMap::resolve) and draws again.

pub mod breadcrumb;
pub mod button;
pub mod combo;
pub mod hint_dot;
pub mod progress;
pub mod slider;
pub mod tab_view;
pub mod text_field;
pub mod toggle;

pub use breadcrumb::BreadcrumbBar;
pub use button::Button;
pub use combo::ComboButton;
pub use hint_dot::HintDot;
pub use progress::ProgressBar;
pub use slider::Slider;
pub use tab_view::TabView;
pub use text_field::TextField;
pub use toggle::ToggleButton;
pub use toggle::ToggleState;

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Splits `width` columns off the left of `area`, or `None` once the row is full.
pub(crate) fn take_cols(area: &mut Rect, width: u16) -> Option<Rect> {
    if area.width == 0 || area.height == 0 || width == 0 {
        return None;
    }
    let w = width.min(area.width);
    let taken = Rect::new(area.x, area.y, w, 1);
    area.x += w;
    area.width -= w;
    Some(taken)
}

pub(crate) fn text_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_cols_shrinks_the_row() {
        let mut row = Rect::new(2, 1, 5, 3);
        assert_eq!(take_cols(&mut row, 3), Some(Rect::new(2, 1, 3, 1)));
        assert_eq!(take_cols(&mut row, 3), Some(Rect::new(5, 1, 2, 1)));
        assert_eq!(take_cols(&mut row, 1), None);
    }
}
