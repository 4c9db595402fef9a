//! Cursor position and movement rules.

use crate::text::document::Document;

/// Edit position in a [`Document`].
///
/// `col` may equal the line length, meaning the cursor sits after the last
/// character of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Line index (0-indexed).
    pub line: usize,
    /// Column in chars (0-indexed).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at `(line, col)`.
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Cursor at the start of the document.
    #[must_use]
    pub const fn start() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Move one char left, wrapping to the end of the previous line.
    pub fn move_left(&mut self, doc: &Document) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.col = doc.line_len(self.line);
        }
    }

    /// Move one char right, wrapping to the start of the next line.
    pub fn move_right(&mut self, doc: &Document) {
        if self.col < doc.line_len(self.line) {
            self.col += 1;
        } else if self.line + 1 < doc.line_count() {
            self.line += 1;
            self.col = 0;
        }
    }

    /// Move one line up, clamping the column to the target line.
    pub fn move_up(&mut self, doc: &Document) {
        if self.line > 0 {
            self.line -= 1;
            self.col = self.col.min(doc.line_len(self.line));
        }
    }

    /// Move one line down, clamping the column to the target line.
    pub fn move_down(&mut self, doc: &Document) {
        if self.line + 1 < doc.line_count() {
            self.line += 1;
            self.col = self.col.min(doc.line_len(self.line));
        }
    }

    /// Pull the cursor back inside `doc`.
    pub fn clamp(&mut self, doc: &Document) {
        self.line = self.line.min(doc.line_count() - 1);
        self.col = self.col.min(doc.line_len(self.line));
    }

    /// Whether the cursor satisfies the position invariant for `doc`.
    #[must_use]
    pub fn is_valid_in(&self, doc: &Document) -> bool {
        self.line < doc.line_count() && self.col <= doc.line_len(self.line)
    }
}
