use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use unicode_width::UnicodeWidthChar;

use crate::viewport::ViewportState;

pub fn render_scrollbar(area: Rect, buf: &mut Buffer, state: &ViewportState, style: Style) {
    buf.set_style(area, style);
    if area.height == 0 {
        return;
    }
    if !state.is_scrollable() || state.content_h == 0 {
        for dy in 0..area.height {
            buf.set_stringn(area.x, area.y + dy, " ", 1, style);
        }
        return;
    }

    let track_h = area.height as f64;
    let thumb_h = ((state.viewport_h as f64 / state.content_h as f64) * track_h)
        .round()
        .clamp(1.0, track_h) as u16;

    let max_y = state
        .content_h
        .saturating_sub(state.viewport_h as u32)
        .max(1) as f64;
    let thumb_top = ((state.y as f64 / max_y) * (track_h - thumb_h as f64))
        .round()
        .clamp(0.0, (track_h - thumb_h as f64).max(0.0)) as u16;

    for dy in 0..area.height {
        let ch = if dy >= thumb_top && dy < thumb_top + thumb_h {
            "█"
        } else {
            " "
        };
        buf.set_stringn(area.x, area.y + dy, ch, 1, style);
    }
}

/// Writes `line` starting at `(x, y)`, never past `max_cols` columns. Wide characters that would
/// straddle the edge are dropped rather than split. Returns the number of columns written.
pub fn render_line_clipped(
    x: u16,
    y: u16,
    max_cols: u16,
    buf: &mut Buffer,
    line: &Line<'_>,
    fallback_style: Style,
) -> u16 {
    if max_cols == 0 {
        return 0;
    }

    let mut dx = 0u16;
    for span in &line.spans {
        let style = fallback_style.patch(line.style).patch(span.style);
        for ch in span.content.chars() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if dx + w > max_cols {
                return dx;
            }

            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_char(ch);
            }
            if w == 2 {
                if let Some(cell) = buf.cell_mut((x + dx + 1, y)) {
                    cell.set_style(style);
                    cell.set_symbol("");
                }
            }
            dx += w;
        }
    }
    dx
}

/// Reads back the symbols of one buffer row. Handy for assertions on rendered output.
pub fn row_text(buf: &Buffer, area: Rect, y: u16) -> String {
    (area.x..area.x + area.width)
        .filter_map(|x| buf.cell((x, y)))
        .map(|c| c.symbol())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn line_is_clipped_at_max_cols() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        let n = render_line_clipped(
            0,
            0,
            3,
            &mut buf,
            &Line::from("abcdef"),
            Style::default(),
        );
        assert_eq!(n, 3);
        assert_eq!(row_text(&buf, Rect::new(0, 0, 8, 1), 0), "abc     ");
    }

    #[test]
    fn wide_char_is_not_split() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        let line = Line::from(vec![Span::raw("a"), Span::raw("你好")]);
        let n = render_line_clipped(0, 0, 4, &mut buf, &line, Style::default());
        assert_eq!(n, 3);
    }

    #[test]
    fn render_scrollbar_does_not_panic() {
        let mut state = ViewportState::default();
        state.set_viewport(5);
        state.set_content(50);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 5));
        render_scrollbar(Rect::new(0, 0, 1, 5), &mut buf, &state, Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "█");
    }
}
