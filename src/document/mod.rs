//! Text document model.
//!
//! - `line`: the per-line character chain and its position handles
//! - `buffer`: the ordered collection of lines being edited

pub mod buffer;
pub mod line;
