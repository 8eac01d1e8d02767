//! Editor mode management for modal editing.
//!
//! textquill has exactly two modes:
//!
//! - **Insert**: typed characters go into the line at the cursor
//! - **Normal**: keys are commands (motions, `dd`, `yy`, `p`, `:` and `/` prompts)
//!
//! Esc moves from Insert to Normal, `i` moves back. A fresh session starts in
//! Insert mode unless the config says otherwise.
//!
//! # Example
//!
//! ```
//! use textquill::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Insert);
//! assert_eq!(format!("{}", EditorMode::Normal), "NORMAL");
//! ```

use std::fmt;

/// The current editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Characters are inserted at the cursor.
    #[default]
    Insert,
    /// Keys are interpreted as commands.
    Normal,
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string for the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::Normal => write!(f, "NORMAL"),
        }
    }
}
