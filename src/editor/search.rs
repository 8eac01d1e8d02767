//! Literal text search and replace.
//!
//! Search is plain substring matching on line content: no regular expressions
//! and no wraparound. A forward search looks at the rest of the starting line,
//! then every following line from column 0. The first match wins.
//!
//! `N` (previous match) only looks backward within the current line.
//!
//! # Example
//!
//! ```
//! use textquill::document::buffer::Document;
//! use textquill::editor::search::SearchEngine;
//!
//! let doc = Document::from_lines(["xabxabx"]);
//! let mut search = SearchEngine::new();
//!
//! let first = search.search(&doc, "ab", 0, 0).unwrap();
//! assert_eq!(first.column, 1);
//!
//! // Columns handed back in are 1-based cursor columns
//! let second = search.find_next(&doc, 0, first.column + 1).unwrap();
//! assert_eq!(second.column, 4);
//! ```

use crate::document::buffer::Document;
use crate::document::line::Line;

/// Location of a match: line index and 0-based character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub line: usize,
    pub column: usize,
}

/// Remembers the last pattern and match so `n`/`N` can repeat a search.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    last_pattern: String,
    last_match: Option<SearchMatch>,
}

/// First occurrence of `needle` in `haystack` starting at or after `from`.
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

/// Last occurrence of `needle` in `haystack` starting at or before `at`.
fn rfind_from(haystack: &[char], needle: &[char], at: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let max = at.min(haystack.len() - needle.len());
    (0..=max)
        .rev()
        .find(|&i| haystack[i..i + needle.len()] == *needle)
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent pattern, if any search has been run.
    pub fn last_pattern(&self) -> Option<&str> {
        if self.last_pattern.is_empty() {
            None
        } else {
            Some(&self.last_pattern)
        }
    }

    pub fn last_match(&self) -> Option<SearchMatch> {
        self.last_match
    }

    /// Searches for `pattern` from `from_column` (0-based) on `from_line`, then
    /// from column 0 on each later line.
    ///
    /// The pattern is remembered even when nothing matches.
    pub fn search(
        &mut self,
        doc: &Document,
        pattern: &str,
        from_line: usize,
        from_column: usize,
    ) -> Option<SearchMatch> {
        self.last_pattern = pattern.to_string();
        let needle: Vec<char> = pattern.chars().collect();

        for (index, line) in doc.lines().enumerate().skip(from_line) {
            let haystack: Vec<char> = line.chars().collect();
            let start = if index == from_line { from_column } else { 0 };
            if let Some(column) = find_from(&haystack, &needle, start) {
                let found = SearchMatch {
                    line: index,
                    column,
                };
                self.last_match = Some(found);
                return Some(found);
            }
        }
        None
    }

    /// Repeats the last search forward from the cursor's 1-based `column`.
    pub fn find_next(&mut self, doc: &Document, line: usize, column: usize) -> Option<SearchMatch> {
        if self.last_pattern.is_empty() {
            return None;
        }
        let pattern = self.last_pattern.clone();
        self.search(doc, &pattern, line, column)
    }

    /// Repeats the last search backward within `line` only, starting one
    /// character before the match under the cursor's 1-based `column`.
    pub fn find_previous(
        &mut self,
        doc: &Document,
        line: usize,
        column: usize,
    ) -> Option<SearchMatch> {
        if self.last_pattern.is_empty() || column < 2 {
            return None;
        }
        let needle: Vec<char> = self.last_pattern.chars().collect();
        let haystack: Vec<char> = doc.line(line)?.chars().collect();

        let column = rfind_from(&haystack, &needle, column - 2)?;
        let found = SearchMatch { line, column };
        self.last_match = Some(found);
        Some(found)
    }

    /// Replaces the first literal occurrence of `old` in `line` with `new`,
    /// or every non-overlapping occurrence when `global` is set.
    ///
    /// Returns false (leaving the line untouched) when `old` does not occur.
    /// On success the line is rebuilt, so every handle into it is invalidated.
    pub fn replace(old: &str, new: &str, line: &mut Line, global: bool) -> bool {
        let needle: Vec<char> = old.chars().collect();
        let replacement: Vec<char> = new.chars().collect();
        let mut content: Vec<char> = line.chars().collect();

        let mut from = 0;
        let mut replaced = false;
        while let Some(at) = find_from(&content, &needle, from) {
            content.splice(at..at + needle.len(), replacement.iter().copied());
            replaced = true;
            if !global {
                break;
            }
            from = at + replacement.len();
        }

        if replaced {
            let text: String = content.into_iter().collect();
            line.set_content(&text);
        }
        replaced
    }
}
