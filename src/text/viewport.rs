//! Scroll offsets of the visible window.

use crate::text::cursor::Cursor;

/// First visible line and column.
///
/// The viewport is never moved directly by the user. It is derived from the
/// cursor with [`Viewport::recompute`] after every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line index.
    pub row_offset: usize,
    /// First visible display cell.
    pub col_offset: usize,
}

impl Viewport {
    /// Create a viewport at the given offsets.
    #[must_use]
    pub const fn new(row_offset: usize, col_offset: usize) -> Self {
        Self {
            row_offset,
            col_offset,
        }
    }

    /// Shift the offsets by the minimal amount that keeps `cursor` inside a
    /// `visible_rows` x `visible_cols` window.
    ///
    /// A zero extent is treated as one so the cursor cell itself stays visible.
    pub fn recompute(&mut self, cursor: Cursor, visible_rows: usize, visible_cols: usize) {
        self.row_offset = scroll_axis(self.row_offset, cursor.line, visible_rows.max(1));
        self.col_offset = scroll_axis(self.col_offset, cursor.col, visible_cols.max(1));
    }

    /// Whether `cursor` lies inside the window.
    #[must_use]
    pub fn contains(&self, cursor: Cursor, visible_rows: usize, visible_cols: usize) -> bool {
        (self.row_offset..self.row_offset + visible_rows.max(1)).contains(&cursor.line)
            && (self.col_offset..self.col_offset + visible_cols.max(1)).contains(&cursor.col)
    }
}

fn scroll_axis(offset: usize, position: usize, extent: usize) -> usize {
    if position < offset {
        position
    } else if position >= offset + extent {
        position + 1 - extent
    } else {
        offset
    }
}
