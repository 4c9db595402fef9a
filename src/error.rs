//! Error types for lexedit.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for lexedit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lexedit operations.
///
/// Only [`Error::Io`] coming from the render surface is fatal to an editing
/// session; the other kinds are recovered into a status message.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal or file operations.
    Io(io::Error),
    /// Undo or redo requested with nothing on the corresponding stack.
    EmptyHistory,
    /// The path handed to an open request does not resolve to a file.
    FileNotFound { path: PathBuf },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EmptyHistory => write!(f, "history is empty"),
            Self::FileNotFound { path } => write!(f, "file not found: {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
