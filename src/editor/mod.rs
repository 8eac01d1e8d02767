//! Editor state and mode management.
//!
//! This module provides the core editing machinery: the two editing modes,
//! the cursor and its motions, literal search and replace, the ex-command
//! grammar, two-key command tracking and the editor state that ties them to
//! a document.
//!
//! # Modules
//!
//! - `mode`: Insert / Normal mode enumeration
//! - `cursor`: Cursor position and character, word and line motions
//! - `search`: Literal search, `n`/`N` repeat and `:s` replacement
//! - `command`: Parsing of `:` commands
//! - `pending`: `dd`, `yy`, `>>` and `<<` state machine
//! - `state`: Editor state management (document, mode, cursor, etc.)
//!
//! # Example
//!
//! ```
//! use textquill::editor::mode::EditorMode;
//!
//! // Editor starts in Insert mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Insert);
//! ```

pub mod command;
pub mod cursor;
pub mod mode;
pub mod pending;
pub mod search;
pub mod state;
