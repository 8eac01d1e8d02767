/// UI module for the textquill terminal interface.
///
/// This module provides the main UI structure for rendering the terminal interface,
/// including layout management and widget composition.
pub mod message_area;
pub mod status_line;
pub mod text_view;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::state::EditorState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of three main areas:
/// - Main view area (top): The document text
/// - Status line (middle): Shows current mode, file info, and cursor position
/// - Message area (bottom): Displays messages and prompts to the user
///
/// # Example
///
/// ```
/// use textquill::ui::UI;
/// use textquill::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the UI to the terminal.
    ///
    /// Scrolls the view first so the cursor line is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use textquill::document::buffer::Document;
    /// use textquill::editor::state::EditorState;
    /// use textquill::theme::get_builtin_theme;
    /// use textquill::ui::UI;
    /// use ratatui::backend::TermionBackend;
    /// use ratatui::Terminal;
    /// use std::io;
    /// use termion::raw::IntoRawMode;
    ///
    /// let ui = UI::new(get_builtin_theme("default-dark").unwrap());
    /// let mut state = EditorState::new_with_defaults(Document::new());
    /// let backend = TermionBackend::new(io::stdout().into_raw_mode().unwrap());
    /// let mut terminal = Terminal::new(backend).unwrap();
    /// ui.render(&mut terminal, &mut state).unwrap();
    /// ```
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Main view area
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            // Adjust scroll to ensure cursor is visible
            let viewport_height = chunks[0].height as usize;
            state.adjust_scroll_to_cursor(viewport_height);

            text_view::render_text_view(f, chunks[0], state, &self.theme.colors);
            status_line::render_status_line(f, chunks[1], state, &self.theme.colors);
            message_area::render_message_area(f, chunks[2], state, &self.theme.colors);
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::buffer::Document;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_executes() {
        let ui = UI::new(get_builtin_theme("default-light").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut state = EditorState::new_with_defaults(Document::new());

        assert!(ui.render(&mut terminal, &mut state).is_ok());
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let lines: Vec<String> = (1..=10).map(|i| format!("line {}", i)).collect();
        let mut state = EditorState::new_with_defaults(Document::from_lines(lines));
        for _ in 0..9 {
            state.move_down();
        }

        ui.render(&mut terminal, &mut state).unwrap();

        // 5 rows: 3 for text, status, message
        assert_eq!(state.scroll_offset(), 7);
        let buffer = terminal.backend().buffer();
        let row: String = buffer.content()[80..120].iter().map(|c| c.symbol()).collect();
        assert!(row.contains("line 10"), "{}", row);
    }
}
