//! Cursor position tracking and the movement engine.
//!
//! A [`Cursor`] is a line index into the [`Document`] plus a [`Position`] handle
//! into that line's character chain. The handle is the insertion point: typed
//! characters go after it, so `Start` means column 0 and `At(node)` means the
//! cursor sits on that character.
//!
//! Motions never leave the cursor on `End`.
//!
//! # Example
//!
//! ```
//! use textquill::document::buffer::Document;
//! use textquill::editor::cursor::Cursor;
//!
//! let doc = Document::from_lines(["  foo, bar"]);
//! let mut cursor = Cursor::new();
//!
//! cursor.move_to_next_word(&doc);
//! assert_eq!(cursor.column(&doc), 3); // on 'f'
//! ```

use crate::document::buffer::Document;
use crate::document::line::{Line, Position};

/// Character classes used by word motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letters and digits
    Word,
    Punctuation,
    Whitespace,
    Other,
}

/// Classifies a character for word motions.
pub fn char_class(c: char) -> CharClass {
    if c.is_ascii_alphanumeric() {
        CharClass::Word
    } else if matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | '(' | ')' | '-' | '_'
    ) {
        CharClass::Punctuation
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Other
    }
}

pub fn is_word_char(c: char) -> bool {
    char_class(c) == CharClass::Word
}

fn is_non_word_char(c: char) -> bool {
    !is_word_char(c)
}

/// Walks forward from `pos` while the character satisfies `pred`.
fn skip_forward(line: &Line, mut pos: Position, pred: fn(char) -> bool) -> Position {
    while let Some(c) = line.get(pos) {
        if !pred(c) {
            break;
        }
        pos = line.next(pos);
    }
    pos
}

/// A (line, handle) pair locating the insertion point in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    line: usize,
    pos: Position,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Creates a cursor at column 0 of the first line.
    pub fn new() -> Self {
        Self {
            line: 0,
            pos: Position::Start,
        }
    }

    pub fn at(line: usize, pos: Position) -> Self {
        Self { line, pos }
    }

    /// Index of the current line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Handle into the current line.
    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Position) {
        self.pos = pos;
    }

    pub fn set(&mut self, line: usize, pos: Position) {
        self.line = line;
        self.pos = pos;
    }

    /// Points the cursor at the start of `line`, clamped to the document.
    pub fn seed(&mut self, doc: &Document, line: usize) {
        self.line = line.min(doc.last_index());
        self.pos = doc[self.line].begin();
    }

    /// 1-based column of the cursor, 0 when on the `Start` sentinel.
    pub fn column(&self, doc: &Document) -> usize {
        doc.line(self.line).map_or(0, |l| l.column(self.pos))
    }

    /// True if the line exists and the handle is live and not `End`.
    pub fn is_valid(&self, doc: &Document) -> bool {
        self.pos != Position::End && doc.line(self.line).is_some_and(|l| l.contains(self.pos))
    }

    /// Steps back one character. Reaching the first character turns the
    /// cursor into the `Start` sentinel.
    pub fn move_left(&mut self, doc: &Document) {
        let line = &doc[self.line];
        self.pos = line.prev(self.pos);
        if self.pos == line.begin() {
            self.pos = Position::Start;
        }
    }

    /// Steps forward one character, never past the last one.
    pub fn move_right(&mut self, doc: &Document) {
        let line = &doc[self.line];
        match self.pos {
            Position::Start => self.pos = line.begin(),
            Position::At(_) => {
                let next = line.next(self.pos);
                if next != Position::End {
                    self.pos = next;
                }
            }
            Position::End => self.pos = line.last(),
        }
    }

    pub fn move_up(&mut self, doc: &Document) {
        if self.line > 0 {
            self.seed(doc, self.line - 1);
        }
    }

    pub fn move_down(&mut self, doc: &Document) {
        if self.line < doc.last_index() {
            self.seed(doc, self.line + 1);
        }
    }

    /// `0`: first character of the line.
    pub fn move_to_line_start(&mut self, doc: &Document) {
        self.pos = doc[self.line].begin();
    }

    /// `$`: last character of the line.
    pub fn move_to_line_end(&mut self, doc: &Document) {
        self.pos = doc[self.line].last();
    }

    /// Runs off the end of the current line: continue at the next line's
    /// start, or stay on the last character of the final line.
    fn wrap_to_next_line(&mut self, doc: &Document) {
        if self.line < doc.last_index() {
            self.seed(doc, self.line + 1);
        } else {
            self.pos = doc[self.line].last();
        }
    }

    /// `w`: start of the next word.
    ///
    /// From a non-word character the cursor stops on the first word character
    /// ahead. From inside a word it skips the rest of the word and the gap
    /// after it. Exhausting the line continues at the next line's start.
    pub fn move_to_next_word(&mut self, doc: &Document) {
        let line = &doc[self.line];
        let origin = match self.pos {
            Position::Start => line.next(Position::Start),
            pos => pos,
        };

        let mut pos = skip_forward(line, origin, is_non_word_char);
        if pos == origin {
            pos = skip_forward(line, pos, is_word_char);
            pos = skip_forward(line, pos, is_non_word_char);
        }

        if pos == Position::End {
            self.wrap_to_next_line(doc);
        } else {
            self.pos = pos;
        }
    }

    /// `b`: first character of the previous word, within the current line.
    ///
    /// A word that begins the line resolves to the `Start` sentinel.
    pub fn move_to_previous_word(&mut self, doc: &Document) {
        let line = &doc[self.line];
        if self.pos == Position::Start {
            return;
        }

        let mut pos = line.prev(self.pos);
        while let Some(c) = line.get(pos) {
            if is_word_char(c) {
                break;
            }
            pos = line.prev(pos);
        }
        if pos == Position::Start {
            self.pos = Position::Start;
            return;
        }

        loop {
            let before = line.prev(pos);
            match line.get(before) {
                Some(c) if is_word_char(c) => pos = before,
                _ => break,
            }
        }

        self.pos = if pos == line.begin() {
            Position::Start
        } else {
            pos
        };
    }

    /// `e`: last character of the current or next word.
    ///
    /// A word that runs to the end of the line moves the cursor to the next
    /// line's start instead.
    pub fn move_to_word_end(&mut self, doc: &Document) {
        let line = &doc[self.line];
        let mut pos = match self.pos {
            Position::Start => line.next(Position::Start),
            pos => pos,
        };

        // Already on a word's last character: look for the next one
        let at_word_end = line.get(pos).is_some_and(is_word_char)
            && !line.get(line.next(pos)).is_some_and(is_word_char);
        if at_word_end {
            pos = line.next(pos);
        }

        pos = skip_forward(line, pos, is_non_word_char);
        pos = skip_forward(line, pos, is_word_char);

        if pos == Position::End {
            self.wrap_to_next_line(doc);
        } else {
            self.pos = line.prev(pos);
        }
    }
}
