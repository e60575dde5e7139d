use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;

/// Converts a crossterm event into an [`InputEvent`], dropping key releases/repeats, focus and
/// resize events.
pub fn input_event_from_crossterm(ev: crossterm::event::Event) -> Option<InputEvent> {
    match ev {
        crossterm::event::Event::Key(key) => {
            if key.kind != crossterm::event::KeyEventKind::Press {
                return None;
            }
            Some(InputEvent::Key(key_event_from_crossterm(key)?))
        }
        crossterm::event::Event::Paste(s) => Some(InputEvent::Paste(s)),
        crossterm::event::Event::Mouse(m) => {
            Some(InputEvent::Mouse(mouse_event_from_crossterm(m)?))
        }
        _ => None,
    }
}

pub fn key_event_from_crossterm(key: crossterm::event::KeyEvent) -> Option<KeyEvent> {
    use crossterm::event::KeyCode as C;

    let code = match key.code {
        C::Char(c) => KeyCode::Char(c),
        C::Enter => KeyCode::Enter,
        C::Backspace => KeyCode::Backspace,
        C::Esc => KeyCode::Esc,
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers: modifiers_from_crossterm(key.modifiers),
    })
}

pub fn mouse_event_from_crossterm(m: crossterm::event::MouseEvent) -> Option<MouseEvent> {
    use crossterm::event::MouseEventKind as K;

    let kind = match m.kind {
        K::Down(b) => MouseEventKind::Down(mouse_button_from_crossterm(b)),
        K::Drag(b) => MouseEventKind::Drag(mouse_button_from_crossterm(b)),
        K::Up(b) => MouseEventKind::Up(mouse_button_from_crossterm(b)),
        K::ScrollUp => MouseEventKind::ScrollUp,
        K::ScrollDown => MouseEventKind::ScrollDown,
        _ => return None,
    };

    Some(MouseEvent {
        x: m.column,
        y: m.row,
        kind,
        modifiers: modifiers_from_crossterm(m.modifiers),
    })
}

fn modifiers_from_crossterm(m: crossterm::event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: m.contains(crossterm::event::KeyModifiers::SHIFT),
        ctrl: m.contains(crossterm::event::KeyModifiers::CONTROL),
        alt: m.contains(crossterm::event::KeyModifiers::ALT),
    }
}

fn mouse_button_from_crossterm(b: crossterm::event::MouseButton) -> MouseButton {
    match b {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_press_maps_to_activation() {
        let ev = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        let Some(InputEvent::Mouse(m)) = input_event_from_crossterm(ev) else {
            panic!("expected a mouse event");
        };
        assert!(m.is_activation());
        assert_eq!((m.x, m.y), (4, 2));
    }

    #[test]
    fn keys_without_an_editing_role_are_dropped() {
        use crossterm::event::KeyCode as C;
        use crossterm::event::KeyEvent as CKeyEvent;
        use crossterm::event::KeyModifiers as CMods;

        for code in [C::Left, C::Home, C::Delete, C::Tab] {
            let ev = crossterm::event::Event::Key(CKeyEvent::new(code, CMods::NONE));
            assert_eq!(input_event_from_crossterm(ev), None);
        }
        let ev = crossterm::event::Event::Key(CKeyEvent::new(C::Backspace, CMods::NONE));
        assert_eq!(
            input_event_from_crossterm(ev),
            Some(InputEvent::Key(KeyEvent::new(KeyCode::Backspace)))
        );
    }

    #[test]
    fn moved_pointer_is_dropped() {
        let ev = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(input_event_from_crossterm(ev), None);
    }
}
