//! Snapshot-based undo/redo history.
//!
//! Every undo-eligible edit captures the whole document and cursor *before*
//! it runs. Undo pops that capture and parks the state being left on the redo
//! stack; redo does the reverse. Only a fresh capture clears the redo stack.
//!
//! ```
//! use lexedit::text::{Cursor, Document, EditKind, History, Snapshot};
//!
//! let mut history = History::new();
//! let mut doc = Document::new();
//! let mut cursor = Cursor::start();
//!
//! history.capture_before(EditKind::InsertChar, Snapshot::capture(&doc, cursor));
//! doc.insert_char(cursor, 'x');
//! cursor.col += 1;
//!
//! let restored = history.undo(Snapshot::capture(&doc, cursor)).unwrap();
//! assert_eq!(restored.cursor(), Cursor::start());
//! assert!(restored.document().is_empty());
//! ```

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Error, Result};
use crate::text::cursor::Cursor;
use crate::text::document::Document;

/// Default maximum number of undo snapshots to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 50;

/// Kind of content mutation a snapshot was captured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKind {
    InsertChar,
    SplitLine,
    JoinLines,
    DeleteChar,
}

/// Immutable capture of the document and cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    cursor: Cursor,
    document: Document,
}

impl Snapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(document: &Document, cursor: Cursor) -> Self {
        Self {
            cursor,
            document: document.clone(),
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Split into owned parts for wholesale restoration.
    #[must_use]
    pub fn into_parts(self) -> (Document, Cursor) {
        (self.document, self.cursor)
    }
}

/// Bounded undo stack plus redo stack.
#[derive(Clone, Debug)]
pub struct History {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Oldest snapshots are evicted once this is exceeded.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_max_depth(DEFAULT_MAX_HISTORY_DEPTH)
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history with a custom depth limit (at least 1).
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Record the pre-state of an undo-eligible edit.
    ///
    /// Clears the redo stack: redo is only valid directly after an undo.
    pub fn capture_before(&mut self, kind: EditKind, snapshot: Snapshot) {
        debug!(?kind, line = snapshot.cursor.line, col = snapshot.cursor.col, "capture");
        self.push_undo(snapshot);
        self.redo_stack.clear();
    }

    /// Pop the latest snapshot, parking `current` on the redo stack.
    pub fn undo(&mut self, current: Snapshot) -> Result<Snapshot> {
        let restored = self.undo_stack.pop_back().ok_or(Error::EmptyHistory)?;
        self.redo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "undo");
        Ok(restored)
    }

    /// Pop the latest redo snapshot, parking `current` on the undo stack.
    pub fn redo(&mut self, current: Snapshot) -> Result<Snapshot> {
        let restored = self.redo_stack.pop().ok_or(Error::EmptyHistory)?;
        self.push_undo(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "redo");
        Ok(restored)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(text: &str, col: usize) -> Snapshot {
        Snapshot::capture(&Document::from_text(text), Cursor::new(0, col))
    }

    #[test]
    fn test_undo_on_empty_fails() {
        let mut history = History::new();
        assert!(matches!(history.undo(snap("", 0)), Err(Error::EmptyHistory)));
        assert!(matches!(history.redo(snap("", 0)), Err(Error::EmptyHistory)));
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = History::new();
        history.capture_before(EditKind::InsertChar, snap("", 0));

        let restored = history.undo(snap("a", 1)).unwrap();
        assert_eq!(restored, snap("", 0));
        assert!(history.can_redo());
        assert!(!history.can_undo());

        let redone = history.redo(restored).unwrap();
        assert_eq!(redone, snap("a", 1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_capture_clears_redo() {
        let mut history = History::new();
        history.capture_before(EditKind::InsertChar, snap("", 0));
        history.undo(snap("a", 1)).unwrap();
        assert_eq!(history.redo_len(), 1);

        history.capture_before(EditKind::InsertChar, snap("", 0));
        assert_eq!(history.redo_len(), 0);
        assert!(matches!(history.redo(snap("b", 1)), Err(Error::EmptyHistory)));
    }

    #[test]
    fn test_redo_stack_survives_consecutive_redos() {
        let mut history = History::new();
        history.capture_before(EditKind::InsertChar, snap("", 0));
        history.capture_before(EditKind::InsertChar, snap("a", 1));
        let s1 = history.undo(snap("ab", 2)).unwrap();
        let s0 = history.undo(s1).unwrap();
        assert_eq!(history.redo_len(), 2);

        let r1 = history.redo(s0).unwrap();
        assert_eq!(r1, snap("a", 1));
        assert_eq!(history.redo_len(), 1);
        let r2 = history.redo(r1).unwrap();
        assert_eq!(r2, snap("ab", 2));
    }

    #[test]
    fn test_depth_limit_evicts_oldest() {
        let mut history = History::new();
        assert_eq!(history.max_depth(), DEFAULT_MAX_HISTORY_DEPTH);

        for i in 0..=DEFAULT_MAX_HISTORY_DEPTH {
            history.capture_before(EditKind::InsertChar, snap(&i.to_string(), 0));
        }
        assert_eq!(history.undo_len(), DEFAULT_MAX_HISTORY_DEPTH);

        let mut current = snap("top", 0);
        let mut oldest = None;
        while let Ok(restored) = history.undo(current.clone()) {
            current = restored.clone();
            oldest = Some(restored);
        }
        // Snapshot "0" was the 51st from the top and got evicted.
        assert_eq!(oldest, Some(snap("1", 0)));
    }

    #[test]
    fn test_custom_depth_is_at_least_one() {
        let history = History::with_max_depth(0);
        assert_eq!(history.max_depth(), 1);
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.capture_before(EditKind::DeleteChar, snap("x", 1));
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
