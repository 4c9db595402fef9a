//! ANSI escape sequence generation.

pub mod sequences;

pub use sequences::*;

use std::io::{self, Write};

/// Generate cursor position sequence (CUP).
///
/// `row` and `col` are 0-based; the emitted sequence is 1-based.
#[must_use]
pub fn cursor_position(row: usize, col: usize) -> String {
    format!("\x1b[{};{}H", row + 1, col + 1)
}

/// Write cursor position sequence directly to a writer.
pub fn write_cursor_position(w: &mut impl Write, row: usize, col: usize) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", row + 1, col + 1)
}
