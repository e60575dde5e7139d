use crate::host::Host;
use crate::host::Visual;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Single-line text field. The caller owns the text and the focus flag.
///
/// Clicking emits `on_focus`; while focused, feed input events through [`edit`].
#[derive(Clone, Debug)]
pub struct TextField<'a, M> {
    value: &'a str,
    focused: bool,
    placeholder: &'a str,
    on_focus: M,
}

impl<'a, M> TextField<'a, M> {
    pub fn new(value: &'a str, focused: bool, on_focus: M) -> Self {
        Self {
            value,
            focused,
            placeholder: "",
            on_focus,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn render<H: Host<M>>(self, area: Rect, host: &mut H, theme: &Theme) {
        let area = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let field_style = if self.focused {
            theme.outline.patch(theme.accent)
        } else {
            theme.outline
        }
        .add_modifier(Modifier::UNDERLINED);

        // One column of padding on each side, one more for the cursor when focused.
        let cursor_w = u16::from(self.focused);
        let room = area.width.saturating_sub(2 + cursor_w) as usize;

        let mut spans = Vec::new();
        if self.value.is_empty() && !self.focused {
            spans.push(Span::styled(self.placeholder.to_string(), theme.text_muted));
        } else {
            spans.push(Span::styled(tail(self.value, room), theme.text_primary));
        }
        if self.focused {
            spans.push(Span::styled("▏", theme.accent));
        }

        host.clickable(
            area,
            &Visual::new(Line::from(spans)).styled(field_style).padded(1),
            self.on_focus,
        );
    }
}

/// The longest suffix of `s` that fits in `cols` columns, so the end being typed stays visible.
fn tail(s: &str, cols: usize) -> String {
    if UnicodeWidthStr::width(s) <= cols {
        return s.to_string();
    }
    let mut used = 0usize;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > cols {
            break;
        }
        used += w;
        start = i;
    }
    s[start..].to_string()
}

/// Applies a key or paste event to a focused field's text. Returns `true` if the text changed.
///
/// Control/alt chords and keys other than character input and backspace are ignored. Pasted
/// newlines are dropped since the field is single-line.
pub fn edit(value: &mut String, event: &InputEvent) -> bool {
    match event {
        InputEvent::Key(key) => {
            if key.modifiers.ctrl || key.modifiers.alt {
                return false;
            }
            match key.code {
                KeyCode::Char(c) => {
                    value.push(c);
                    true
                }
                KeyCode::Backspace => value.pop().is_some(),
                _ => false,
            }
        }
        InputEvent::Paste(text) => {
            let before = value.len();
            value.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
            value.len() != before
        }
        InputEvent::Mouse(_) => false,
    }
}
