//! File I/O for text documents.
//!
//! This module loads files from disk as lines and saves lines back with atomic
//! writes, optional backups and transparent gzip for `.gz` paths.

pub mod loader;
pub mod saver;
