//! Keyboard input.
//!
//! Raw terminal bytes go through [`InputParser`] into [`KeyEvent`]s, and
//! [`Keymap`] resolves those into the [`InputEvent`]s the editor dispatches.

mod event;
mod keyboard;
mod keymap;
mod parser;

pub use event::InputEvent;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use keymap::Keymap;
pub use parser::{InputParser, ParseError, ParseResult};
