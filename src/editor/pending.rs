//! Two-key Normal mode commands (`dd`, `yy`, `>>`, `<<`).
//!
//! The first key arms a verb; pressing the same key again confirms it. Any
//! other key disarms without acting and is then handled on its own.
//!
//! # Example
//!
//! ```
//! use textquill::editor::pending::{PendingCommand, Verb};
//!
//! let mut pending = PendingCommand::default();
//! assert_eq!(pending.feed(Verb::Delete), None);
//! assert_eq!(pending.feed(Verb::Delete), Some(Verb::Delete));
//! assert!(pending.is_idle());
//! ```

/// Operations that need their key pressed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `dd`
    Delete,
    /// `yy`
    Yank,
    /// `>>`
    Indent,
    /// `<<`
    Outdent,
}

impl Verb {
    /// The key that arms and confirms this verb.
    pub fn key(self) -> char {
        match self {
            Verb::Delete => 'd',
            Verb::Yank => 'y',
            Verb::Indent => '>',
            Verb::Outdent => '<',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingCommand {
    #[default]
    Idle,
    AwaitingSecond(Verb),
}

impl PendingCommand {
    pub fn is_idle(&self) -> bool {
        matches!(self, PendingCommand::Idle)
    }

    /// Feeds a verb key. Returns the verb when it completes a pair; otherwise
    /// arms `verb` (replacing any different armed verb).
    pub fn feed(&mut self, verb: Verb) -> Option<Verb> {
        match *self {
            PendingCommand::AwaitingSecond(armed) if armed == verb => {
                *self = PendingCommand::Idle;
                Some(verb)
            }
            _ => {
                *self = PendingCommand::AwaitingSecond(verb);
                None
            }
        }
    }

    /// Disarms any pending verb.
    pub fn clear(&mut self) {
        *self = PendingCommand::Idle;
    }
}
