//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (NORMAL, INSERT)
//! - Filename (or "[No File]" if unnamed)
//! - Dirty indicator "[+]" for unsaved changes
//! - Cursor line and column, and the total line count
//!
//! Example status line: ` NORMAL  notes.txt [+]          Ln 5, Col 3 | 20 lines`

use crate::editor::mode::EditorMode;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line from [`EditorState::status`].
///
/// # Arguments
///
/// * `f` - The ratatui frame to render into
/// * `area` - The rectangular area to render the status line in
/// * `state` - The editor state to summarize
/// * `colors` - Theme colors for styling the status line
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let status = state.status();

    let mode_text = format!(" {} ", status.mode);
    let mode_color = match status.mode {
        EditorMode::Insert => colors.mode_insert,
        EditorMode::Normal => colors.mode_normal,
    };
    let file_text = format!(" {}", status.filename);
    let dirty_indicator = if status.modified { " [+]" } else { "" };
    let position = format!(
        "Ln {}, Col {} | {} lines ",
        status.line, status.column, status.total_lines
    );

    // Calculate padding to position right-aligned text
    let total_width = area.width as usize;
    let left_len = mode_text.chars().count()
        + file_text.chars().count()
        + dirty_indicator.len();
    let position_len = position.len();
    let padding = if left_len + position_len + 1 < total_width {
        total_width - left_len - position_len
    } else {
        1
    };

    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let mode_style = Style::default()
        .fg(colors.status_line_bg)
        .bg(mode_color)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(mode_text, mode_style),
        Span::styled(file_text, default_style),
    ];
    if !dirty_indicator.is_empty() {
        spans.push(Span::styled(dirty_indicator, default_style));
    }
    spans.push(Span::styled(" ".repeat(padding), default_style));
    spans.push(Span::styled(position, default_style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::buffer::Document;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &EditorState) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_line(f, area, state, &theme.colors);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().take(80).map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_status_line_no_filename() {
        let state = EditorState::new_with_defaults(Document::new());
        let text = render(&state);
        assert!(
            text.contains("[No File]"),
            "Status line should show [No File]: {}",
            text
        );
        assert!(text.contains("INSERT"));
        assert!(!text.contains("[+]"));
    }

    #[test]
    fn test_status_line_with_filename_and_position() {
        let mut state = EditorState::new_with_defaults(Document::from_lines(["abc", "de"]));
        state.set_filename("notes.txt".to_string());
        state.move_down();
        state.mark_dirty();

        let text = render(&state);
        assert!(text.contains("notes.txt [+]"), "{}", text);
        assert!(text.contains("Ln 2, Col 1 | 2 lines"), "{}", text);
    }
}
