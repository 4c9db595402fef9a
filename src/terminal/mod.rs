//! Terminal state management.
//!
//! [`Terminal`] owns the output writer and tracks which modes (raw input,
//! alternate screen, hidden cursor) it switched on, so [`Terminal::cleanup`]
//! and `Drop` undo exactly those.

mod raw;

pub use raw::{READ_TIMEOUT_DECISECONDS, RawModeGuard, enable_raw_mode, is_tty, terminal_size};

use crate::ansi::{self, sequences};
use crate::style::Style;
use std::io::{self, Write};

/// Terminal state manager.
pub struct Terminal<W: Write> {
    writer: W,
    alt_screen: bool,
    cursor_visible: bool,
    raw_mode_guard: Option<RawModeGuard>,
}

impl<W: Write> Terminal<W> {
    /// Create a new terminal with the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            alt_screen: false,
            cursor_visible: true,
            raw_mode_guard: None,
        }
    }

    #[must_use]
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode_guard.is_some()
    }

    #[must_use]
    pub fn is_alt_screen(&self) -> bool {
        self.alt_screen
    }

    #[must_use]
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Enter raw mode on stdin.
    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        if self.raw_mode_guard.is_none() {
            self.raw_mode_guard = Some(enable_raw_mode()?);
        }
        Ok(())
    }

    /// Restore the terminal mode saved by [`Terminal::enter_raw_mode`].
    pub fn exit_raw_mode(&mut self) {
        self.raw_mode_guard = None;
    }

    pub fn enter_alt_screen(&mut self) -> io::Result<()> {
        if !self.alt_screen {
            self.writer.write_all(sequences::ALT_SCREEN_ON.as_bytes())?;
            self.alt_screen = true;
        }
        Ok(())
    }

    pub fn leave_alt_screen(&mut self) -> io::Result<()> {
        if self.alt_screen {
            self.writer.write_all(sequences::ALT_SCREEN_OFF.as_bytes())?;
            self.alt_screen = false;
        }
        Ok(())
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        if self.cursor_visible {
            self.writer.write_all(sequences::CURSOR_HIDE.as_bytes())?;
            self.cursor_visible = false;
        }
        Ok(())
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        if !self.cursor_visible {
            self.writer.write_all(sequences::CURSOR_SHOW.as_bytes())?;
            self.cursor_visible = true;
        }
        Ok(())
    }

    /// Move cursor to a 0-based position.
    pub fn move_cursor(&mut self, row: usize, col: usize) -> io::Result<()> {
        ansi::write_cursor_position(&mut self.writer, row, col)
    }

    /// Write text in the given style, then reset attributes.
    pub fn write_styled(&mut self, style: &Style, text: &str) -> io::Result<()> {
        self.writer.write_all(style.sgr().as_bytes())?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(sequences::RESET.as_bytes())
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::CLEAR_SCREEN.as_bytes())?;
        self.writer.write_all(sequences::CURSOR_HOME.as_bytes())
    }

    /// Begin synchronized update (for flicker-free rendering).
    pub fn begin_sync(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::sync::BEGIN.as_bytes())
    }

    pub fn end_sync(&mut self) -> io::Result<()> {
        self.writer.write_all(sequences::sync::END.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Borrow the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Undo every mode this terminal switched on.
    pub fn cleanup(&mut self) -> io::Result<()> {
        self.show_cursor()?;
        self.leave_alt_screen()?;
        self.exit_raw_mode();
        self.writer.write_all(sequences::RESET.as_bytes())?;
        self.flush()
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
