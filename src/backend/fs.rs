use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::backend::Persistence;
use crate::error::{Error, Result};

/// [`Persistence`] on the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsPersistence;

impl FsPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Persistence for FsPersistence {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        debug!(path = %path.display(), lines = lines.len(), "read file");
        Ok(lines)
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        fs::write(path, lines.join("\n"))?;
        debug!(path = %path.display(), lines = lines.len(), "wrote file");
        Ok(())
    }
}
