//! Message area rendering for displaying messages and prompt input.

use crate::editor::state::{EditorState, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the message area at the bottom of the screen.
///
/// Displays:
/// - An open prompt: `:` or `/` followed by the typed text, with the cursor
/// - Messages: errors, warnings, info
/// - Empty when there is neither
pub fn render_message_area(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let content = if let Some(prompt) = state.prompt() {
        let text = format!("{}{}", prompt.kind.prefix(), prompt.buffer);
        let x = (text.chars().count() as u16).min(area.width.saturating_sub(1));
        f.set_cursor_position((area.x + x, area.y));
        Line::from(vec![Span::styled(text, Style::default().fg(colors.prompt))])
    } else if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        Line::from(vec![Span::styled(
            message.text.as_str(),
            Style::default().fg(color),
        )])
    } else {
        Line::from("")
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
