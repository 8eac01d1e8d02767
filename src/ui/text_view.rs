//! Text area rendering: visible lines, line-number gutter and cursor.
//!
//! Tabs are expanded to the next multiple of the configured tab width. Long
//! lines are cut at the right edge.

use crate::editor::mode::EditorMode;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Expands tabs in `text` to spaces.
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\t' {
            let pad = tab_width - out.chars().count() % tab_width;
            out.extend(std::iter::repeat(' ').take(pad));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Screen width of the first `count` characters of `text`.
pub fn display_width(text: &str, count: usize, tab_width: usize) -> usize {
    text.chars().take(count).fold(0, |width, ch| {
        if ch == '\t' {
            width + tab_width - width % tab_width
        } else {
            width + 1
        }
    })
}

/// Width of the line-number gutter, including its trailing space.
pub fn gutter_width(state: &EditorState) -> usize {
    if state.show_line_numbers() {
        state.document().line_count().to_string().len() + 1
    } else {
        0
    }
}

/// Renders the visible part of the document and places the terminal cursor.
///
/// In Insert mode the cursor sits after the character it refers to, which is
/// where the next typed character goes. In Normal mode it sits on that
/// character.
pub fn render_text_view(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let tab_width = state.tab_width();
    let gutter = gutter_width(state);
    let number_width = gutter.saturating_sub(1);
    let cursor_line = state.cursor().line();

    let text_style = Style::default().fg(colors.foreground).bg(colors.background);
    let lines: Vec<Line> = state
        .document()
        .lines()
        .enumerate()
        .skip(state.scroll_offset())
        .take(area.height as usize)
        .map(|(index, line)| {
            let mut spans = Vec::with_capacity(2);
            if gutter > 0 {
                let color = if index == cursor_line {
                    colors.current_line_number
                } else {
                    colors.line_number
                };
                spans.push(Span::styled(
                    format!("{:>width$} ", index + 1, width = number_width),
                    Style::default().fg(color),
                ));
            }
            spans.push(Span::styled(
                expand_tabs(&line.content(), tab_width),
                text_style,
            ));
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).style(text_style), area);

    if state.prompt().is_some() || area.width == 0 || area.height == 0 {
        return;
    }

    let row = cursor_line.saturating_sub(state.scroll_offset());
    if row >= area.height as usize {
        return;
    }
    let column = state.cursor().column(state.document());
    let chars_before = match state.mode() {
        EditorMode::Insert => column,
        EditorMode::Normal => column.saturating_sub(1),
    };
    let text = state.document()[cursor_line].content();
    let x = gutter + display_width(&text, chars_before, tab_width);
    let x = x.min(area.width as usize - 1);

    f.set_cursor_position((area.x + x as u16, area.y + row as u16));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::document::buffer::Document;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area().width as usize;
        buffer.content()[row as usize * width..(row as usize + 1) * width]
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\tx", 4), "    x");
        assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
        assert_eq!(display_width("ab\tc", 3, 4), 4);
        assert_eq!(display_width("ab\tc", 4, 4), 5);
    }

    #[test]
    fn test_renders_gutter_and_text() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = EditorState::new_with_defaults(Document::from_lines(["hello", "\tworld"]));
        let theme = theme::get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| render_text_view(f, f.area(), &state, &theme.colors))
            .unwrap();

        assert!(row_text(&terminal, 0).starts_with("1 hello"));
        assert!(row_text(&terminal, 1).starts_with("2     world"));
    }

    #[test]
    fn test_cursor_after_inserted_text() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let config = Config {
            show_line_numbers: false,
            ..Config::default()
        };
        let mut state = EditorState::new(Document::new(), &config);
        state.insert_char('a');
        state.insert_char('b');
        let theme = theme::get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| render_text_view(f, f.area(), &state, &theme.colors))
            .unwrap();

        let pos = terminal.get_cursor_position().unwrap();
        assert_eq!((pos.x, pos.y), (2, 0));
    }
}
