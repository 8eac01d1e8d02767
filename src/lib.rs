//! textquill: a modal terminal text editor.
//!
//! The library holds everything except terminal setup, so the editing core can
//! be driven and tested without a terminal.
//!
//! - [`document`]: lines as arena-backed character chains, and the document
//! - [`editor`]: modes, cursor motions, search, ex-commands, editor state
//! - [`input`]: key mapping and the command dispatcher
//! - [`file`]: loading and saving text files
//! - [`ui`] and [`theme`]: ratatui rendering
//! - [`config`] and [`logging`]: ambient setup

pub mod config;
pub mod document;
pub mod editor;
pub mod file;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
