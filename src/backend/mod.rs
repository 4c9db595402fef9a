//! Collaborators the editor talks to: a render surface, file persistence and
//! a file picker.
//!
//! The editor only sees these traits. [`TerminalSurface`], [`FsPersistence`]
//! and [`LinePrompt`] are the implementations the binary wires up.

mod fs;
mod prompt;
mod surface;

pub use fs::FsPersistence;
pub use prompt::{LinePrompt, OPEN_PROMPT, SAVE_PROMPT};
pub use surface::{StdioSurface, TerminalSurface};

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::highlight::Paint;
use crate::input::InputEvent;

/// A grid of styled character cells plus a blocking event source.
pub trait Surface {
    /// Current size as `(cols, rows)`.
    fn size(&self) -> (usize, usize);

    /// Start a new frame.
    fn clear(&mut self);

    /// Place `text` at a 0-based cell position. Text running past the right
    /// edge is clipped.
    fn place_styled_text(&mut self, row: usize, col: usize, text: &str, paint: Paint);

    /// Show everything placed since the last [`Surface::clear`].
    fn present(&mut self) -> Result<()>;

    /// Block until the next editor command arrives.
    fn next_input_event(&mut self) -> Result<InputEvent>;
}

/// Flat newline-joined text files.
pub trait Persistence {
    /// Read a file as lines. Fails with [`Error::FileNotFound`] when the
    /// path does not resolve.
    ///
    /// [`Error::FileNotFound`]: crate::Error::FileNotFound
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Write lines joined by `\n`, without a trailing newline.
    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()>;
}

/// Asks the user for a path. `Ok(None)` means the user cancelled.
///
/// Pickers get the surface so they can draw and read keys in place.
pub trait FilePicker {
    fn prompt_open_path(&mut self, surface: &mut dyn Surface) -> Result<Option<PathBuf>>;

    fn prompt_save_path(
        &mut self,
        surface: &mut dyn Surface,
        suggested: &Path,
    ) -> Result<Option<PathBuf>>;
}
