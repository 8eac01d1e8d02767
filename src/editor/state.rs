//! Editor state management.
//!
//! This module provides the `EditorState` struct that manages all runtime state
//! for the editor: the document being edited, the current editing mode, the
//! cursor, the yank buffer, the dirty flag (unsaved changes), the optional
//! filename and the prompt being typed at the bottom of the screen.
//!
//! Every operation that changes the document goes through `EditorState`, which
//! is responsible for leaving the cursor pointing at a live character (or a
//! sentinel) afterwards.
//!
//! # State Components
//!
//! - **Document**: The lines being edited
//! - **Mode**: Current editing mode (Insert or Normal)
//! - **Cursor**: Current line and position within it
//! - **Yank buffer**: Text of the last line copied with `yy`
//! - **Dirty flag**: Whether there are unsaved changes
//! - **Filename**: Optional path to the file being edited
//!
//! # Example
//!
//! ```
//! use textquill::document::buffer::Document;
//! use textquill::editor::mode::EditorMode;
//! use textquill::editor::state::EditorState;
//!
//! let mut state = EditorState::new_with_defaults(Document::new());
//!
//! // Starts in Insert mode, not dirty
//! assert_eq!(state.mode(), &EditorMode::Insert);
//! assert!(!state.is_dirty());
//!
//! state.insert_char('h');
//! state.insert_char('i');
//! assert!(state.is_dirty());
//! assert_eq!(state.document().to_strings(), vec!["hi".to_string()]);
//! ```

use super::cursor::Cursor;
use super::mode::EditorMode;
use super::search::{SearchEngine, SearchMatch};
use crate::config::Config;
use crate::document::buffer::Document;
use crate::document::line::Position;
use crate::file::loader::load_text_file;
use crate::file::saver::{save_text_file, SaveOptions};
use anyhow::Result;

/// Represents a message to display to the user.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Which line of input is being typed at the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// `:` ex-command
    Command,
    /// `/` search pattern
    Search,
}

impl PromptKind {
    /// The character shown before the typed text.
    pub fn prefix(self) -> char {
        match self {
            PromptKind::Command => ':',
            PromptKind::Search => '/',
        }
    }
}

/// A partially typed `:` or `/` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

/// Values shown on the status line, derived from the state on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub mode: EditorMode,
    /// File name, or `[No File]`
    pub filename: String,
    pub modified: bool,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, 0 before the first character
    pub column: usize,
    pub total_lines: usize,
}

/// Manages the complete runtime state of the editor.
///
/// # Examples
///
/// ```
/// use textquill::document::buffer::Document;
/// use textquill::editor::state::EditorState;
///
/// let mut state = EditorState::new_with_defaults(Document::from_lines(["one", "two"]));
/// assert_eq!(state.filename(), None);
///
/// state.yank_line();
/// state.paste_after();
/// assert_eq!(state.document().to_strings(), vec!["one", "one", "two"]);
/// assert_eq!(state.cursor().line(), 0);
/// ```
pub struct EditorState {
    document: Document,
    mode: EditorMode,
    cursor: Cursor,
    yank: Option<String>,
    dirty: bool,
    filename: Option<String>,
    message: Option<Message>,
    prompt: Option<Prompt>,
    search: SearchEngine,
    scroll_offset: usize,
    show_line_numbers: bool,
    tab_width: usize,
    save_options: SaveOptions,
}

impl EditorState {
    /// Creates an editor state for `document`, configured from `config`.
    ///
    /// The cursor starts before the first character of the first line.
    pub fn new(document: Document, config: &Config) -> Self {
        let mode = if config.start_in_insert_mode {
            EditorMode::Insert
        } else {
            EditorMode::Normal
        };

        Self {
            document,
            mode,
            cursor: Cursor::new(),
            yank: None,
            dirty: false,
            filename: None,
            message: None,
            prompt: None,
            search: SearchEngine::new(),
            scroll_offset: 0,
            show_line_numbers: config.show_line_numbers,
            tab_width: config.tab_width.max(1),
            save_options: SaveOptions {
                create_backup: config.create_backup,
            },
        }
    }

    /// Creates an editor state using the default configuration.
    pub fn new_with_defaults(document: Document) -> Self {
        Self::new(document, &Config::default())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Returns whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the document as having unsaved changes.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears the dirty flag, indicating all changes have been saved.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Returns the filename of the document being edited, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    /// Text of the last yanked line.
    pub fn yank_buffer(&self) -> Option<&str> {
        self.yank.as_deref()
    }

    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn search_engine(&self) -> &SearchEngine {
        &self.search
    }

    // -- cursor motions ------------------------------------------------------

    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.document);
    }

    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.document);
    }

    pub fn move_up(&mut self) {
        self.cursor.move_up(&self.document);
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(&self.document);
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.move_to_line_start(&self.document);
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.move_to_line_end(&self.document);
    }

    pub fn move_to_next_word(&mut self) {
        self.cursor.move_to_next_word(&self.document);
    }

    pub fn move_to_previous_word(&mut self) {
        self.cursor.move_to_previous_word(&self.document);
    }

    pub fn move_to_word_end(&mut self) {
        self.cursor.move_to_word_end(&self.document);
    }

    // -- insert mode editing -------------------------------------------------

    /// Inserts `ch` after the cursor and moves onto it.
    pub fn insert_char(&mut self, ch: char) {
        let line = self.cursor.line();
        let pos = self.document[line].insert_after(self.cursor.pos(), ch);
        self.cursor.set_pos(pos);
        self.mark_dirty();
    }

    /// Splits the current line after the cursor. The cursor moves to the
    /// start of the new line.
    pub fn split_line(&mut self) {
        let line = self.cursor.line();
        if self.document.split_at(line, self.cursor.pos()) {
            self.cursor.set(line + 1, Position::Start);
            self.mark_dirty();
        }
    }

    /// Deletes the character under the cursor, or joins the line onto the
    /// previous one when the cursor is at the line start.
    ///
    /// Returns false if there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        let line = self.cursor.line();
        if self.cursor.pos() == Position::Start {
            return match self.document.merge_into_previous(line) {
                Some(join) => {
                    self.cursor.set(line - 1, join);
                    self.mark_dirty();
                    true
                }
                None => false,
            };
        }

        let pos = self.document[line].delete(self.cursor.pos());
        self.cursor.set_pos(pos);
        self.mark_dirty();
        true
    }

    // -- normal mode editing -------------------------------------------------

    /// `x`: deletes the character under the cursor. No-op at the line start.
    pub fn delete_char(&mut self) -> bool {
        if !matches!(self.cursor.pos(), Position::At(_)) {
            return false;
        }
        let line = self.cursor.line();
        let pos = self.document[line].delete(self.cursor.pos());
        self.cursor.set_pos(pos);
        self.mark_dirty();
        true
    }

    /// `D`: deletes from the cursor to the end of the line. No-op before the
    /// first character.
    pub fn delete_to_end(&mut self) {
        if !matches!(self.cursor.pos(), Position::At(_)) {
            return;
        }
        let line = self.cursor.line();
        let pos = self.document[line].delete_to_end(self.cursor.pos());
        self.cursor.set_pos(pos);
        self.mark_dirty();
    }

    /// `dd`: deletes the current line. A lone line is cleared instead.
    pub fn delete_current_line(&mut self) {
        let line = self.cursor.line();
        if self.document.delete_line(line) {
            self.cursor.seed(&self.document, line);
            self.mark_dirty();
        }
    }

    /// `:d N`: deletes 1-based line `number`.
    ///
    /// Returns false if `number` is out of range.
    pub fn delete_line_number(&mut self, number: usize) -> bool {
        if number == 0 || number > self.document.line_count() {
            return false;
        }
        let index = number - 1;
        let current = self.cursor.line();
        self.document.delete_line(index);

        if index < current {
            self.cursor.set(current - 1, self.cursor.pos());
        } else if index == current {
            self.cursor.seed(&self.document, current);
        }
        self.mark_dirty();
        true
    }

    /// `yy`: copies the current line's text into the yank buffer.
    pub fn yank_line(&mut self) {
        let text = self.document[self.cursor.line()].content();
        self.yank = Some(text);
    }

    /// `p`: inserts the yanked text as a new line below the cursor. The
    /// cursor stays where it is.
    ///
    /// Returns false if nothing has been yanked.
    pub fn paste_after(&mut self) -> bool {
        self.paste_at(self.cursor.line() + 1)
    }

    /// `P`: inserts the yanked text as a new line above the cursor. The
    /// cursor follows its line down.
    pub fn paste_before(&mut self) -> bool {
        let line = self.cursor.line();
        if !self.paste_at(line) {
            return false;
        }
        self.cursor.set(line + 1, self.cursor.pos());
        true
    }

    fn paste_at(&mut self, index: usize) -> bool {
        let Some(text) = self.yank.as_deref() else {
            return false;
        };
        self.document.insert_line(index, text);
        self.mark_dirty();
        true
    }

    /// `n`: opens an empty line below the cursor.
    pub fn open_line_below(&mut self) {
        let index = self.document.insert_line(self.cursor.line() + 1, "");
        self.cursor.seed(&self.document, index);
        self.mark_dirty();
    }

    /// `J`: appends the next line to the current one.
    pub fn join_lines(&mut self) -> bool {
        let joined = self.document.join_with_next(self.cursor.line());
        if joined {
            self.mark_dirty();
        }
        joined
    }

    /// `>>`: adds one leading tab.
    pub fn indent_line(&mut self) {
        let line = self.cursor.line();
        self.document[line].insert_after(Position::Start, '\t');
        self.mark_dirty();
    }

    /// `<<`: removes one leading tab, if there is one.
    pub fn outdent_line(&mut self) -> bool {
        let line = &mut self.document[self.cursor.line()];
        let first = line.begin();
        if line.get(first) != Some('\t') {
            return false;
        }
        line.delete(first);
        if self.cursor.pos() == first {
            self.cursor.set_pos(Position::Start);
        }
        self.mark_dirty();
        true
    }

    // -- search and replace --------------------------------------------------

    /// `/pattern`: searches forward from the cursor.
    pub fn search_forward(&mut self, pattern: &str) -> bool {
        let column = self.cursor.column(&self.document);
        let found = self
            .search
            .search(&self.document, pattern, self.cursor.line(), column);
        self.jump_to_match(found)
    }

    /// `n` inside a search: next occurrence of the last pattern.
    pub fn search_next(&mut self) -> bool {
        let column = self.cursor.column(&self.document);
        let found = self
            .search
            .find_next(&self.document, self.cursor.line(), column);
        self.jump_to_match(found)
    }

    /// `N` inside a search: previous occurrence on the current line.
    pub fn search_previous(&mut self) -> bool {
        let column = self.cursor.column(&self.document);
        let found = self
            .search
            .find_previous(&self.document, self.cursor.line(), column);
        self.jump_to_match(found)
    }

    fn jump_to_match(&mut self, found: Option<SearchMatch>) -> bool {
        match found {
            Some(m) => {
                let pos = self.document[m.line].position_at(m.column);
                self.cursor.set(m.line, pos);
                true
            }
            None => false,
        }
    }

    /// `:s/old/new/[g]` on the current line.
    ///
    /// The line is rebuilt, so the cursor is re-seeded at its old column.
    pub fn replace(&mut self, old: &str, new: &str, global: bool) -> bool {
        let line_index = self.cursor.line();
        let column = self.cursor.column(&self.document);
        let line = &mut self.document[line_index];

        if !SearchEngine::replace(old, new, line, global) {
            return false;
        }

        let column = column.min(line.len());
        let pos = match column {
            0 => Position::Start,
            n => line.position_at(n - 1),
        };
        self.cursor.set_pos(pos);
        self.mark_dirty();
        true
    }

    // -- files ---------------------------------------------------------------

    /// `:e path`: replaces the buffer with the contents of `path`.
    ///
    /// On failure the current buffer is left untouched.
    pub fn load_file(&mut self, path: &str) -> Result<()> {
        let lines = load_text_file(path)?;
        self.document = Document::from_lines(lines);
        self.cursor.seed(&self.document, 0);
        self.filename = Some(path.to_string());
        self.scroll_offset = 0;
        self.clear_dirty();
        tracing::info!(path, lines = self.document.line_count(), "opened file");
        Ok(())
    }

    /// Writes the buffer to `path` and makes it the current file name.
    ///
    /// On failure the dirty flag is left as it was.
    pub fn save_to(&mut self, path: &str) -> Result<()> {
        save_text_file(path, &self.document.to_strings(), self.save_options)?;
        self.filename = Some(path.to_string());
        self.clear_dirty();
        tracing::info!(path, "saved file");
        Ok(())
    }

    // -- messages and prompt -------------------------------------------------

    /// Returns the current message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Sets a message to display to the user.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    /// Clears the current message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Starts typing a `:` or `/` line.
    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            buffer: String::new(),
        });
    }

    pub fn push_to_prompt(&mut self, ch: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.buffer.push(ch);
        }
    }

    /// Removes the last typed character. Returns false if the prompt was
    /// already empty.
    pub fn pop_from_prompt(&mut self) -> bool {
        self.prompt
            .as_mut()
            .is_some_and(|prompt| prompt.buffer.pop().is_some())
    }

    /// Closes the prompt, handing back what was typed.
    pub fn take_prompt(&mut self) -> Option<Prompt> {
        self.prompt.take()
    }

    // -- view ----------------------------------------------------------------

    /// Returns the current scroll offset (top line of viewport).
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Adjusts scroll offset to ensure the cursor is visible in the viewport.
    ///
    /// # Arguments
    ///
    /// * `viewport_height` - The height of the visible area in lines
    pub fn adjust_scroll_to_cursor(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        let line = self.cursor.line();
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + viewport_height {
            self.scroll_offset = line - viewport_height + 1;
        }
    }

    /// Derives the status line fields from the document and cursor.
    pub fn status(&self) -> StatusInfo {
        StatusInfo {
            mode: self.mode,
            filename: self
                .filename
                .clone()
                .unwrap_or_else(|| "[No File]".to_string()),
            modified: self.dirty,
            line: self.cursor.line() + 1,
            column: self.cursor.column(&self.document),
            total_lines: self.document.line_count(),
        }
    }
}
