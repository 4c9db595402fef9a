//! Editing engine: document storage, cursor, viewport, and undo history.
//!
//! Key types:
//!
//! - [`Document`]: ordered lines, the only place content is mutated
//! - [`Cursor`]: `(line, col)` edit position with wrap/clamp movement rules
//! - [`Viewport`]: scroll offsets derived from the cursor
//! - [`History`]: bounded snapshot undo stack plus redo stack
//!
//! # Examples
//!
//! ```
//! use lexedit::text::{Cursor, Document};
//!
//! let mut doc = Document::new();
//! let mut cursor = Cursor::start();
//! for ch in "ab".chars() {
//!     doc.insert_char(cursor, ch);
//!     cursor.col += 1;
//! }
//! doc.split_line(cursor);
//! assert_eq!(doc.lines(), &["ab", ""]);
//!
//! cursor.move_right(&doc);
//! assert_eq!(cursor, Cursor::new(1, 0));
//! ```

mod cursor;
mod document;
mod history;
mod viewport;

pub use cursor::Cursor;
pub use document::{Document, char_width};
pub use history::{DEFAULT_MAX_HISTORY_DEPTH, EditKind, History, Snapshot};
pub use viewport::Viewport;
