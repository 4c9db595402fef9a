//! Lexical syntax highlighting.
//!
//! [`Compositor::classify`] runs six regex classifiers over a line and
//! composes their matches with last-match-wins per character.
//! [`Compositor::paint`] adds the cursor overlay on top, and [`Theme`] turns
//! the resulting [`Paint`] slots into terminal styles.
//!
//! ```
//! use lexedit::highlight::{Compositor, HighlightClass};
//!
//! let spans = Compositor::new().classify("def x = 5");
//! assert_eq!(spans[0].class, HighlightClass::Identifier);
//! assert_eq!(spans.last().unwrap().class, HighlightClass::Number);
//! ```

mod compositor;
mod theme;
pub mod token;

pub use compositor::{Classifier, Compositor};
pub use theme::Theme;
pub use token::{HighlightClass, HighlightSpan, Paint};
