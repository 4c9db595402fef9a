//! Owned editing state and the edit operations on it.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::text::{Cursor, Document, EditKind, History, Snapshot, Viewport, char_width};

/// Status shown until the first command replaces it.
pub const HELP_MESSAGE: &str =
    "Press ESC to exit | F2 to save | F3 to open | Ctrl+Z to undo | Ctrl+Y to redo";

/// Everything one editing session owns.
///
/// Content edits capture a snapshot before mutating; cursor moves never touch
/// history. The cursor invariant holds after every method.
#[derive(Clone, Debug)]
pub struct Session {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    history: History,
    status: String,
    file_name: PathBuf,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Session {
    /// Empty document named after `config.default_file_name`.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            document: Document::new(),
            cursor: Cursor::start(),
            viewport: Viewport::default(),
            history: History::with_max_depth(config.history_depth),
            status: HELP_MESSAGE.to_string(),
            file_name: PathBuf::from(&config.default_file_name),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replace the status message.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    #[must_use]
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn set_file_name(&mut self, file_name: impl Into<PathBuf>) {
        self.file_name = file_name.into();
    }

    fn capture(&mut self, kind: EditKind) {
        let snapshot = Snapshot::capture(&self.document, self.cursor);
        self.history.capture_before(kind, snapshot);
    }

    /// Insert `ch` at the cursor and step past it.
    pub fn insert_char(&mut self, ch: char) {
        self.capture(EditKind::InsertChar);
        self.document.insert_char(self.cursor, ch);
        self.cursor.col += 1;
        self.debug_check();
    }

    /// Split the line at the cursor and move to the start of the new line.
    pub fn newline(&mut self) {
        self.capture(EditKind::SplitLine);
        self.document.split_line(self.cursor);
        self.cursor = Cursor::new(self.cursor.line + 1, 0);
        self.debug_check();
    }

    /// Delete the char before the cursor, or join with the previous line at
    /// column 0. Returns `false` at the document start, where nothing changes
    /// and nothing is captured.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.col > 0 {
            self.capture(EditKind::DeleteChar);
            self.document.delete_char_before(self.cursor);
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.capture(EditKind::JoinLines);
            let line = self.cursor.line;
            let col = self
                .document
                .join_with_previous(line)
                .unwrap_or_else(|| self.document.line_len(line - 1));
            self.cursor = Cursor::new(line - 1, col);
        } else {
            trace!("backspace at document start");
            return false;
        }
        self.debug_check();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.document);
    }

    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.document);
    }

    pub fn move_up(&mut self) {
        self.cursor.move_up(&self.document);
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(&self.document);
    }

    /// Restore the latest snapshot. Fails with [`Error::EmptyHistory`] and
    /// leaves everything untouched when there is nothing to undo.
    ///
    /// [`Error::EmptyHistory`]: crate::Error::EmptyHistory
    pub fn undo(&mut self) -> Result<()> {
        let current = Snapshot::capture(&self.document, self.cursor);
        let restored = self.history.undo(current)?;
        self.restore(restored);
        Ok(())
    }

    /// Re-apply the latest undone state.
    pub fn redo(&mut self) -> Result<()> {
        let current = Snapshot::capture(&self.document, self.cursor);
        let restored = self.history.redo(current)?;
        self.restore(restored);
        Ok(())
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let (document, cursor) = snapshot.into_parts();
        self.document = document;
        self.cursor = cursor;
        self.debug_check();
    }

    /// Replace the document with freshly loaded content.
    ///
    /// Cursor and viewport go back to the origin and history is dropped.
    pub fn load(&mut self, lines: Vec<String>, file_name: impl Into<PathBuf>) {
        self.document.replace(lines);
        self.cursor = Cursor::start();
        self.viewport = Viewport::default();
        self.history.clear();
        self.file_name = file_name.into();
    }

    /// Cursor position with the column measured in display cells.
    #[must_use]
    pub fn display_cursor(&self) -> Cursor {
        let Cursor { line, col } = self.cursor;
        Cursor::new(line, self.document.display_col(line, col))
    }

    /// Scroll so the cursor cell sits inside a `rows` x `cols` text area.
    ///
    /// Columns are display cells. A wide char under the cursor is brought
    /// fully into view when the area is wide enough.
    pub fn recompute_viewport(&mut self, rows: usize, cols: usize) {
        let start = self.display_cursor();
        let width = self
            .document
            .line(self.cursor.line)
            .and_then(|line| line.chars().nth(self.cursor.col))
            .map_or(1, |ch| char_width(ch).max(1));
        let last_cell = Cursor::new(start.line, start.col + width - 1);
        self.viewport.recompute(last_cell, rows, cols);
        self.viewport.recompute(start, rows, cols);
    }

    fn debug_check(&self) {
        debug_assert!(
            self.cursor.is_valid_in(&self.document),
            "cursor {:?} outside document",
            self.cursor
        );
    }
}
