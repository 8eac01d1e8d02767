//! The document: an ordered sequence of [`Line`]s.
//!
//! A `Document` always holds at least one line. Deleting the last remaining
//! line clears it in place instead of removing it.
//!
//! # Example
//!
//! ```
//! use textquill::document::buffer::Document;
//!
//! let mut doc = Document::from_lines(["first", "second"]);
//! assert_eq!(doc.line_count(), 2);
//!
//! doc.delete_line(0);
//! doc.delete_line(0);
//! assert_eq!(doc.line_count(), 1);
//! assert_eq!(doc.to_strings(), vec![String::new()]);
//! ```

use super::line::{Line, Position};
use std::ops::{Index, IndexMut};

/// Owns every line of the text being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Creates a document holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Builds a document from text lines. An empty input yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<Line> = lines.into_iter().map(|l| Line::from(l.as_ref())).collect();
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn line_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.get_mut(index)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Materializes every line's content, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.lines.iter().map(Line::content).collect()
    }

    /// Index of the last line.
    pub fn last_index(&self) -> usize {
        self.lines.len() - 1
    }

    /// Inserts a new line holding `content` at `index` (clamped to the end).
    ///
    /// Returns the index the line landed at.
    pub fn insert_line(&mut self, index: usize, content: &str) -> usize {
        let index = index.min(self.lines.len());
        self.lines.insert(index, Line::from(content));
        index
    }

    /// Removes the line at `index`. Returns false if `index` is out of range.
    ///
    /// The final remaining line is cleared rather than removed.
    pub fn delete_line(&mut self, index: usize) -> bool {
        if index >= self.lines.len() {
            return false;
        }
        if self.lines.len() == 1 {
            self.lines[0].clear();
        } else {
            self.lines.remove(index);
        }
        true
    }

    /// Splits the line at `index` after `pos`; the tail becomes line `index + 1`.
    pub fn split_at(&mut self, index: usize, pos: Position) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        let rest = line.split_off(pos);
        self.lines.insert(index + 1, rest);
        true
    }

    /// Appends line `index` to the end of line `index - 1` and removes it.
    ///
    /// Returns the join point in the previous line (its old last character, or
    /// `Start` if it was empty). `None` for the first line or an invalid index.
    pub fn merge_into_previous(&mut self, index: usize) -> Option<Position> {
        if index == 0 || index >= self.lines.len() {
            return None;
        }
        let line = self.lines.remove(index);
        Some(self.lines[index - 1].append(&line))
    }

    /// Joins line `index + 1` onto line `index`. No-op on the last line.
    pub fn join_with_next(&mut self, index: usize) -> bool {
        self.merge_into_previous(index + 1).is_some()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Document {
    type Output = Line;

    fn index(&self, index: usize) -> &Line {
        &self.lines[index]
    }
}

impl IndexMut<usize> for Document {
    fn index_mut(&mut self, index: usize) -> &mut Line {
        &mut self.lines[index]
    }
}
