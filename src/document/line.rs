//! Line buffer: one line of text stored as a doubly linked chain of characters.
//!
//! Nodes live in a per-line arena and are addressed by stable [`NodeId`]s, so a
//! cursor holds an index rather than a reference into the chain. Positions are
//! tagged explicitly:
//!
//! - [`Position::Start`]: before the first character (column 0). This is also
//!   the only resting position on an empty line.
//! - [`Position::At`]: on a specific character node.
//! - [`Position::End`]: one past the last character. Used as the terminator of
//!   forward scans, never as a resting cursor position.
//!
//! Every operation that removes nodes hands back the position the caller should
//! use next, so a cursor never has to hold on to a freed node.
//!
//! # Example
//!
//! ```
//! use textquill::document::line::{Line, Position};
//!
//! let mut line = Line::new();
//! let mut pos = Position::Start;
//! for ch in "helo".chars() {
//!     pos = line.insert_after(pos, ch);
//! }
//! assert_eq!(line.content(), "helo");
//!
//! // Step back onto 'e' and insert the missing 'l' after it
//! let pos = line.prev(line.prev(pos));
//! line.insert_after(pos, 'l');
//! assert_eq!(line.content(), "hello");
//! ```

use std::fmt;

/// Index of a character node inside a [`Line`]'s arena.
pub type NodeId = usize;

/// A handle into a line's character chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Before the first character.
    Start,
    /// On the character stored in this node.
    At(NodeId),
    /// One past the last character.
    End,
}

#[derive(Debug, Clone)]
struct CharNode {
    ch: char,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// One line of text as a doubly linked sequence of characters.
///
/// The text is never stored separately; [`Line::content`] walks the chain.
#[derive(Debug, Clone, Default)]
pub struct Line {
    slots: Vec<Option<CharNode>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl Line {
    /// Creates an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters in the line.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn node(&self, id: NodeId) -> Option<&CharNode> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut CharNode> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// Returns true if `pos` refers to a live node (or is a sentinel).
    pub fn contains(&self, pos: Position) -> bool {
        match pos {
            Position::Start | Position::End => true,
            Position::At(id) => self.node(id).is_some(),
        }
    }

    /// Character under `pos`, if it is a live node.
    pub fn get(&self, pos: Position) -> Option<char> {
        match pos {
            Position::At(id) => self.node(id).map(|n| n.ch),
            _ => None,
        }
    }

    /// Handle to the first character, or `Start` when the line is empty.
    pub fn begin(&self) -> Position {
        self.head.map_or(Position::Start, Position::At)
    }

    /// The one-past-the-end sentinel.
    pub fn end(&self) -> Position {
        Position::End
    }

    /// Handle to the last character, or `Start` when the line is empty.
    pub fn last(&self) -> Position {
        self.tail.map_or(Position::Start, Position::At)
    }

    /// Steps one character forward. `End` is returned past the tail.
    pub fn next(&self, pos: Position) -> Position {
        match pos {
            Position::Start => self.head.map_or(Position::End, Position::At),
            Position::At(id) => self
                .node(id)
                .and_then(|n| n.next)
                .map_or(Position::End, Position::At),
            Position::End => Position::End,
        }
    }

    /// Steps one character backward. `Start` is returned before the head.
    pub fn prev(&self, pos: Position) -> Position {
        match pos {
            Position::Start => Position::Start,
            Position::At(id) => self
                .node(id)
                .and_then(|n| n.prev)
                .map_or(Position::Start, Position::At),
            Position::End => self.last(),
        }
    }

    fn alloc(&mut self, node: CharNode) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Inserts `ch` immediately after `pos` and returns a handle to the new node.
    ///
    /// `Start` inserts before the current head, `End` appends after the tail.
    pub fn insert_after(&mut self, pos: Position, ch: char) -> Position {
        let (prev, next) = match pos {
            Position::Start => (None, self.head),
            Position::End => (self.tail, None),
            Position::At(id) => match self.node(id) {
                Some(node) => (Some(id), node.next),
                None => {
                    debug_assert!(false, "insert_after on a freed node {id}");
                    (self.tail, None)
                }
            },
        };

        let id = self.alloc(CharNode { ch, prev, next });

        match prev.and_then(|p| self.node_mut(p)) {
            Some(p) => p.next = Some(id),
            None => self.head = Some(id),
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(n) => n.prev = Some(id),
            None => self.tail = Some(id),
        }

        self.len += 1;
        Position::At(id)
    }

    /// Appends `ch` after the last character.
    pub fn push(&mut self, ch: char) -> Position {
        self.insert_after(Position::End, ch)
    }

    /// Unlinks and frees the node under `pos`.
    ///
    /// Returns the predecessor's handle, or `Start` if the head was deleted.
    /// Sentinels and stale handles are a no-op and are returned unchanged.
    pub fn delete(&mut self, pos: Position) -> Position {
        let Position::At(id) = pos else {
            return pos;
        };
        let Some(node) = self.slots.get_mut(id).and_then(Option::take) else {
            return pos;
        };
        self.free.push(id);

        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(p) => p.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(n) => n.prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.prev.map_or(Position::Start, Position::At)
    }

    /// Deletes the character under `pos` and everything after it.
    ///
    /// From `Start` the whole line is cleared. Returns the handle that now
    /// precedes the removed run.
    pub fn delete_to_end(&mut self, pos: Position) -> Position {
        let first = match pos {
            Position::Start => self.begin(),
            Position::At(id) if self.node(id).is_some() => pos,
            _ => return pos,
        };
        let keep = self.prev(first);
        while let Position::At(_) = self.next(keep) {
            self.delete(self.next(keep));
        }
        keep
    }

    /// Number of forward steps from `from` to `to`.
    ///
    /// Returns `None` when `to` cannot be reached walking forward from `from`.
    pub fn distance(&self, from: Position, to: Position) -> Option<usize> {
        let mut cur = from;
        let mut steps = 0;
        loop {
            if cur == to {
                return Some(steps);
            }
            if cur == Position::End || !self.contains(cur) {
                return None;
            }
            cur = self.next(cur);
            steps += 1;
        }
    }

    /// 1-based column of `pos`: 0 for `Start`, the character count for `End`.
    pub fn column(&self, pos: Position) -> usize {
        match pos {
            Position::Start => 0,
            Position::End => self.len,
            Position::At(_) => self.distance(Position::Start, pos).unwrap_or(0),
        }
    }

    /// Handle to the character at 0-based `index`, or `End` if out of range.
    pub fn position_at(&self, index: usize) -> Position {
        let mut pos = self.next(Position::Start);
        for _ in 0..index {
            if pos == Position::End {
                break;
            }
            pos = self.next(pos);
        }
        pos
    }

    /// Materializes the line's text.
    pub fn content(&self) -> String {
        self.chars().collect()
    }

    /// Iterates the characters in order.
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            line: self,
            next: self.head,
        }
    }

    /// Frees every node, leaving an empty line.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Rebuilds the line from `text`. All existing handles become invalid.
    pub fn set_content(&mut self, text: &str) {
        self.clear();
        for ch in text.chars() {
            self.push(ch);
        }
    }

    /// Moves every character after `pos` into a new line and returns it.
    pub fn split_off(&mut self, pos: Position) -> Line {
        let mut rest = Line::new();
        let mut cur = self.next(pos);
        while let Some(ch) = self.get(cur) {
            rest.push(ch);
            cur = self.next(cur);
        }
        self.delete_to_end(self.next(pos));
        rest
    }

    /// Appends a copy of every character of `other`.
    ///
    /// Returns the handle of the character that preceded the appended run,
    /// i.e. the join point.
    pub fn append(&mut self, other: &Line) -> Position {
        let join = self.last();
        for ch in other.chars() {
            self.push(ch);
        }
        join
    }

    /// Verifies the chain: links are mutual, head and tail are terminal and
    /// the walked length matches the stored length.
    pub fn is_well_formed(&self) -> bool {
        if let Some(head) = self.head {
            if self.node(head).map_or(true, |n| n.prev.is_some()) {
                return false;
            }
        }
        if let Some(tail) = self.tail {
            if self.node(tail).map_or(true, |n| n.next.is_some()) {
                return false;
            }
        }

        let mut count = 0;
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let Some(node) = self.node(id) else {
                return false;
            };
            if node.prev != prev {
                return false;
            }
            count += 1;
            if count > self.slots.len() {
                return false;
            }
            prev = Some(id);
            cur = node.next;
        }
        prev == self.tail && count == self.len
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl FromIterator<char> for Line {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut line = Line::new();
        for ch in iter {
            line.push(ch);
        }
        line
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.chars().eq(other.chars())
    }
}

impl Eq for Line {}

/// Forward iterator over a line's characters.
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    line: &'a Line,
    next: Option<NodeId>,
}

impl Iterator for Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let node = self.line.node(self.next?)?;
        self.next = node.next;
        Some(node.ch)
    }
}
