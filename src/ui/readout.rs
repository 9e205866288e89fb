//! The elapsed-time readout, drawn in 5-row block glyphs.

use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const GLYPH_ROWS: usize = 5;

fn glyph(c: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let g = match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        '.' => [" ", " ", " ", " ", "█"],
        _ => return None,
    };
    Some(g)
}

/// Lay out `text` as big glyph rows, one column of space between glyphs.
/// Returns `None` if any character has no glyph.
pub fn big_text(text: &str) -> Option<Vec<String>> {
    let mut rows = vec![String::new(); GLYPH_ROWS];
    for (i, c) in text.chars().enumerate() {
        let g = glyph(c)?;
        for (row, part) in rows.iter_mut().zip(g) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    Some(rows)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let text = state.stopwatch.formatted_time();
    let style = theme.readout(state.stopwatch.state());

    if let Some(rows) = big_text(text) {
        let width = rows[0].chars().count() as u16;
        if width <= area.width && GLYPH_ROWS as u16 <= area.height {
            let target = centered(area, width, GLYPH_ROWS as u16);
            let lines: Vec<Line> = rows.into_iter().map(|r| Line::styled(r, style)).collect();
            frame.render_widget(Paragraph::new(lines), target);
            return;
        }
    }

    // Too small for big glyphs
    let target = centered(area, area.width, 1);
    let paragraph = Paragraph::new(Span::styled(text.to_string(), style)).alignment(Alignment::Center);
    frame.render_widget(paragraph, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_big_text_shape() {
        let rows = big_text("00:00:00").unwrap();
        assert_eq!(rows.len(), GLYPH_ROWS);
        // six digits of 3 columns, two colons of 1, seven gaps
        let width = 6 * 3 + 2 + 7;
        for row in &rows {
            assert_eq!(row.chars().count(), width);
        }
        assert_eq!(rows[0], "███ ███   ███ ███   ███ ███");
    }

    #[test]
    fn test_big_text_centiseconds() {
        let rows = big_text("00:00:05.25").unwrap();
        assert_eq!(rows[4].chars().count(), 8 * 3 + 3 + 10);
    }

    #[test]
    fn test_big_text_rejects_unknown_chars() {
        assert!(big_text("1h").is_none());
    }
}
