//! Input event handler for polling and processing keyboard events.
//!
//! `InputHandler` is the command dispatcher. Besides mapping keys to editing
//! operations it owns the transient state that spans several key presses:
//! the armed half of a two-key command (`dd`, `yy`, `>>`, `<<`) and the search
//! repeat loop entered after a successful `/` search, where `n` and `N` repeat
//! the search until any other key is pressed.

use super::keys::{map_key_event, InputEvent};
use crate::editor::command::ExCommand;
use crate::editor::mode::EditorMode;
use crate::editor::pending::{PendingCommand, Verb};
use crate::editor::state::{EditorState, MessageLevel, PromptKind};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::{Event, Key};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and updates editor state.
///
/// The InputHandler polls for termion events and converts them to
/// high-level InputEvents, then updates the editor state accordingly.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
    /// First key of a two-key command, if one has been pressed
    pending: PendingCommand,
    /// True between a `/` search and the first key that is not `n` or `N`
    search_active: bool,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    ///
    /// # Example
    ///
    /// ```
    /// use textquill::input::InputHandler;
    ///
    /// let handler = InputHandler::new();
    /// ```
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
            pending: PendingCommand::default(),
            search_active: false,
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin is not a terminal.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
            pending: PendingCommand::default(),
            search_active: false,
        })
    }

    /// True while `n` / `N` repeat the last search.
    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    /// The armed half of a two-key command.
    pub fn pending(&self) -> &PendingCommand {
        &self.pending
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None if the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event system fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use textquill::input::InputHandler;
    /// use std::time::Duration;
    ///
    /// let mut handler = InputHandler::new();
    /// let event = handler.poll_event(Duration::from_millis(100)).unwrap();
    /// ```
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input buffer.
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Returns true if the application should quit.
    ///
    /// # Arguments
    ///
    /// * `event` - The termion Event to handle
    /// * `state` - The editor state to update
    ///
    /// # Returns
    ///
    /// Ok(true) if the application should quit, Ok(false) otherwise
    ///
    /// # Example
    ///
    /// ```no_run
    /// use textquill::document::buffer::Document;
    /// use textquill::editor::mode::EditorMode;
    /// use textquill::editor::state::EditorState;
    /// use textquill::input::InputHandler;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut state = EditorState::new_with_defaults(Document::new());
    /// state.set_mode(EditorMode::Normal);
    /// let should_quit = handler.handle_event(Event::Key(Key::Char('q')), &mut state).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, state: &mut EditorState) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(false);
        };

        if state.prompt().is_some() {
            return self.handle_prompt_key(key, state);
        }

        state.clear_message();

        if self.search_active {
            match key {
                // A repeat that finds nothing ends the loop
                Key::Char('n') => {
                    if !state.search_next() {
                        report_not_found(state);
                        self.search_active = false;
                    }
                    return Ok(false);
                }
                Key::Char('N') => {
                    if !state.search_previous() {
                        report_not_found(state);
                        self.search_active = false;
                    }
                    return Ok(false);
                }
                Key::Esc => {
                    self.search_active = false;
                    return Ok(false);
                }
                // Any other key ends the loop and is handled normally
                _ => self.search_active = false,
            }
        }

        let input = map_key_event(event, state.mode());
        tracing::trace!(?input, mode = %state.mode(), "dispatch");

        if *state.mode() == EditorMode::Normal {
            if let Some(verb) = two_key_verb(&input) {
                if let Some(confirmed) = self.pending.feed(verb) {
                    apply_verb(confirmed, state);
                }
                return Ok(false);
            }
            self.pending.clear();
        }

        match input {
            // Bare `q` leaves without checking for unsaved changes; `:q` checks
            InputEvent::Quit => Ok(true),
            InputEvent::EnterInsertMode => {
                state.set_mode(EditorMode::Insert);
                Ok(false)
            }
            InputEvent::ExitMode => {
                state.set_mode(EditorMode::Normal);
                Ok(false)
            }
            InputEvent::EnterCommandMode => {
                state.open_prompt(PromptKind::Command);
                Ok(false)
            }
            InputEvent::EnterSearchMode => {
                state.open_prompt(PromptKind::Search);
                Ok(false)
            }
            InputEvent::MoveDown => {
                state.move_down();
                Ok(false)
            }
            InputEvent::MoveUp => {
                state.move_up();
                Ok(false)
            }
            InputEvent::MoveLeft => {
                state.move_left();
                Ok(false)
            }
            InputEvent::MoveRight => {
                state.move_right();
                Ok(false)
            }
            InputEvent::LineStart => {
                state.move_to_line_start();
                Ok(false)
            }
            InputEvent::LineEnd => {
                state.move_to_line_end();
                Ok(false)
            }
            InputEvent::NextWord => {
                state.move_to_next_word();
                Ok(false)
            }
            InputEvent::PreviousWord => {
                state.move_to_previous_word();
                Ok(false)
            }
            InputEvent::WordEnd => {
                state.move_to_word_end();
                Ok(false)
            }
            InputEvent::DeleteChar => {
                state.delete_char();
                Ok(false)
            }
            InputEvent::DeleteToEnd => {
                state.delete_to_end();
                Ok(false)
            }
            InputEvent::Paste => {
                if !state.paste_after() {
                    report_empty_yank(state);
                }
                Ok(false)
            }
            InputEvent::PasteBefore => {
                if !state.paste_before() {
                    report_empty_yank(state);
                }
                Ok(false)
            }
            InputEvent::OpenLine => {
                state.open_line_below();
                Ok(false)
            }
            InputEvent::JoinLines => {
                state.join_lines();
                Ok(false)
            }
            InputEvent::InsertCharacter(c) => {
                state.insert_char(c);
                Ok(false)
            }
            InputEvent::InsertBackspace => {
                state.backspace();
                Ok(false)
            }
            InputEvent::InsertEnter => {
                state.split_line();
                Ok(false)
            }
            InputEvent::Delete
            | InputEvent::Yank
            | InputEvent::Indent
            | InputEvent::Outdent
            | InputEvent::Unknown => Ok(false),
        }
    }

    /// Keys typed while a `:` or `/` line is open.
    fn handle_prompt_key(&mut self, key: Key, state: &mut EditorState) -> Result<bool> {
        match key {
            Key::Char('\n') | Key::Char('\r') => {
                let Some(prompt) = state.take_prompt() else {
                    return Ok(false);
                };
                match prompt.kind {
                    PromptKind::Command => self.execute_command(&prompt.buffer, state),
                    PromptKind::Search => {
                        self.run_search(&prompt.buffer, state);
                        Ok(false)
                    }
                }
            }
            Key::Esc => {
                state.take_prompt();
                Ok(false)
            }
            Key::Backspace => {
                // Backspace on an empty prompt closes it
                if !state.pop_from_prompt() {
                    state.take_prompt();
                }
                Ok(false)
            }
            Key::Char(c) => {
                state.push_to_prompt(c);
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Runs a `/` search. A hit enters the `n`/`N` repeat loop.
    fn run_search(&mut self, pattern: &str, state: &mut EditorState) {
        tracing::debug!(pattern, "search");
        self.search_active = state.search_forward(pattern);
        if !self.search_active {
            report_not_found(state);
        }
    }

    /// Executes a `:` command. Returns true if the editor should quit.
    fn execute_command(&self, command: &str, state: &mut EditorState) -> Result<bool> {
        let command = command.trim();
        if command.is_empty() {
            return Ok(false);
        }

        let parsed = match ExCommand::parse(command) {
            Ok(parsed) => parsed,
            Err(e) => {
                state.set_message(e.to_string(), MessageLevel::Error);
                return Ok(false);
            }
        };
        tracing::debug!(?parsed, "executing command");

        match parsed {
            ExCommand::Write(path) => {
                write_buffer(path, ":w", state);
                Ok(false)
            }
            ExCommand::WriteQuit(path) => Ok(write_buffer(path, ":wq", state)),
            ExCommand::Quit => Ok(quit_guarded(state)),
            ExCommand::ForceQuit => Ok(true),
            ExCommand::Edit(path) => {
                match state.load_file(&path) {
                    Ok(()) => {
                        let lines = state.document().line_count();
                        state.set_message(
                            format!("\"{}\" {} lines", path, lines),
                            MessageLevel::Info,
                        );
                    }
                    Err(e) => {
                        tracing::warn!(path, "load failed: {:#}", e);
                        state.set_message(
                            format!("Error loading file: {:#}", e),
                            MessageLevel::Error,
                        );
                    }
                }
                Ok(false)
            }
            ExCommand::DeleteLine(number) => {
                if !state.delete_line_number(number) {
                    state.set_message(
                        format!("Line {} out of range", number),
                        MessageLevel::Warning,
                    );
                }
                Ok(false)
            }
            ExCommand::Substitute { old, new, global } => {
                if !state.replace(&old, &new, global) {
                    state.set_message(
                        format!("Pattern not found: {}", old),
                        MessageLevel::Warning,
                    );
                }
                Ok(false)
            }
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn two_key_verb(input: &InputEvent) -> Option<Verb> {
    match input {
        InputEvent::Delete => Some(Verb::Delete),
        InputEvent::Yank => Some(Verb::Yank),
        InputEvent::Indent => Some(Verb::Indent),
        InputEvent::Outdent => Some(Verb::Outdent),
        _ => None,
    }
}

fn apply_verb(verb: Verb, state: &mut EditorState) {
    match verb {
        Verb::Delete => state.delete_current_line(),
        Verb::Yank => {
            state.yank_line();
            state.set_message("1 line yanked".to_string(), MessageLevel::Info);
        }
        Verb::Indent => state.indent_line(),
        Verb::Outdent => {
            state.outdent_line();
        }
    }
}

/// Refuses to quit with unsaved changes.
fn quit_guarded(state: &mut EditorState) -> bool {
    if state.is_dirty() {
        state.set_message(
            "No write since last change (use :q! to force)".to_string(),
            MessageLevel::Error,
        );
        return false;
    }
    true
}

/// Saves to `path`, or to the current file name. Returns true on success.
fn write_buffer(path: Option<String>, command: &str, state: &mut EditorState) -> bool {
    let Some(filename) = path.or_else(|| state.filename().map(str::to_string)) else {
        state.set_message(
            format!("No file name (use {} <filename>)", command),
            MessageLevel::Error,
        );
        return false;
    };

    match state.save_to(&filename) {
        Ok(()) => {
            state.set_message(format!("\"{}\" written", filename), MessageLevel::Info);
            true
        }
        Err(e) => {
            tracing::warn!(path = %filename, "save failed: {:#}", e);
            state.set_message(format!("Error saving file: {:#}", e), MessageLevel::Error);
            false
        }
    }
}

fn report_not_found(state: &mut EditorState) {
    let pattern = state
        .search_engine()
        .last_pattern()
        .unwrap_or_default()
        .to_string();
    state.set_message(
        format!("Pattern not found: {}", pattern),
        MessageLevel::Warning,
    );
}

fn report_empty_yank(state: &mut EditorState) {
    state.set_message("Nothing to paste".to_string(), MessageLevel::Warning);
}
