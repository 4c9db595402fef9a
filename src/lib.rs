//! `lexedit` - terminal text editor engine
//!
//! A line-based document with a char-column cursor, a scrolling viewport,
//! bounded snapshot undo/redo and regex-based lexical highlighting, driven by
//! a single-threaded command dispatcher over pluggable render, file and
//! prompt backends.
//!
//! ```
//! use lexedit::editor::Session;
//!
//! let mut session = Session::default();
//! for ch in "ab".chars() {
//!     session.insert_char(ch);
//! }
//! session.newline();
//! session.insert_char('c');
//! session.backspace();
//! assert_eq!(session.document().lines(), ["ab", ""]);
//!
//! session.backspace();
//! assert_eq!(session.document().lines(), ["ab"]);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for termios FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::module_name_repetitions)] // Allow HighlightClass, InputEvent etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod ansi;
pub mod backend;
pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod input;
pub mod style;
pub mod terminal;
pub mod text;

// Re-export core types at crate root
pub use color::Color;
pub use config::EditorConfig;
pub use error::{Error, Result};
pub use style::{Style, TextAttributes};

// Re-export editing types
pub use editor::{Editor, Flow, Session};
pub use text::{Cursor, Document, History, Snapshot, Viewport};

// Re-export highlighting and input types
pub use highlight::{Compositor, HighlightClass, HighlightSpan, Paint, Theme};
pub use input::{InputEvent, InputParser, KeyCode, KeyEvent, KeyModifiers, Keymap};

// Re-export backend types
pub use backend::{FilePicker, FsPersistence, LinePrompt, Persistence, StdioSurface, Surface};
pub use terminal::{RawModeGuard, Terminal, enable_raw_mode, is_tty, terminal_size};
