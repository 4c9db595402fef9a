//! The editing session and the command dispatcher driving it.
//!
//! [`Session`] owns the document, cursor, viewport, history and status line.
//! [`Editor`] maps [`InputEvent`]s onto it and talks to the backend
//! collaborators for rendering, files and path prompts.
//!
//! [`InputEvent`]: crate::input::InputEvent

mod dispatcher;
pub mod render;
mod session;

pub use dispatcher::{Editor, Flow};
pub use session::{HELP_MESSAGE, Session};
