//! Raw mode terminal handling.
//!
//! Raw mode turns off line buffering, echo and signal keys so every key press
//! reaches the editor as bytes. Reads are configured with a short timeout,
//! which is how a lone Escape press is told apart from the start of an
//! escape sequence.
//!
//! # Safety
//! This module uses unsafe code for FFI calls to libc termios functions.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

/// Read timeout in tenths of a second while in raw mode.
pub const READ_TIMEOUT_DECISECONDS: u8 = 1;

/// Saved terminal state, restored on drop.
#[derive(Debug)]
pub struct RawModeGuard {
    fd: RawFd,
    original: libc::termios,
}

impl RawModeGuard {
    /// Enter raw mode on the given file descriptor.
    ///
    /// Reads return after at most `timeout` tenths of a second, possibly
    /// with zero bytes.
    pub fn new<F: AsRawFd>(fd: &F, timeout: u8) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let original = get_termios(fd)?;
        set_termios(fd, &raw_termios(original, timeout))?;
        Ok(Self { fd, original })
    }

    fn restore(&self) -> io::Result<()> {
        set_termios(self.fd, &self.original)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Derive raw settings from the saved ones.
fn raw_termios(original: libc::termios, timeout: u8) -> libc::termios {
    let mut raw = original;
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    raw.c_oflag &= !libc::OPOST;
    raw.c_cflag |= libc::CS8;
    // ISIG off: Ctrl+Z and Ctrl+Y arrive as bytes instead of job control.
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = timeout;
    raw
}

/// Enter raw mode for stdin with the default read timeout.
pub fn enable_raw_mode() -> io::Result<RawModeGuard> {
    RawModeGuard::new(&io::stdin(), READ_TIMEOUT_DECISECONDS)
}

/// Check if the given file descriptor is a TTY.
#[must_use]
pub fn is_tty<F: AsRawFd>(fd: &F) -> bool {
    // SAFETY: isatty is safe to call with any fd
    unsafe { libc::isatty(fd.as_raw_fd()) == 1 }
}

/// Terminal size as `(cols, rows)`.
///
/// Zero dimensions are reported as an error.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

fn get_termios(fd: RawFd) -> io::Result<libc::termios> {
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };

    // SAFETY: tcgetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(termios)
    }
}

fn set_termios(fd: RawFd, termios: &libc::termios) -> io::Result<()> {
    // SAFETY: tcsetattr is safe when passed a valid termios struct
    let result = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_termios_flags() {
        let original: libc::termios = unsafe { std::mem::zeroed() };
        let mut cooked = original;
        cooked.c_lflag |= libc::ECHO | libc::ICANON | libc::ISIG;
        cooked.c_iflag |= libc::ICRNL | libc::IXON;

        let raw = raw_termios(cooked, 3);
        assert_eq!(raw.c_lflag & (libc::ECHO | libc::ICANON | libc::ISIG), 0);
        assert_eq!(raw.c_iflag & (libc::ICRNL | libc::IXON), 0);
        assert_ne!(raw.c_cflag & libc::CS8, 0);
        assert_eq!(raw.c_cc[libc::VMIN], 0);
        assert_eq!(raw.c_cc[libc::VTIME], 3);
    }

    #[test]
    fn test_regular_file_is_not_tty() {
        let file = tempfile::tempfile().expect("Failed to create temp file");
        assert!(!is_tty(&file));
    }

    #[test]
    fn test_raw_mode_on_file_fails() {
        let file = tempfile::tempfile().expect("Failed to create temp file");
        assert!(RawModeGuard::new(&file, READ_TIMEOUT_DECISECONDS).is_err());
    }

    #[test]
    fn test_terminal_size_valid_dimensions() {
        // Without a TTY this errors; with one the size must be non-zero.
        if let Ok((cols, rows)) = terminal_size() {
            assert!(cols > 0);
            assert!(rows > 0);
        }
    }

    #[test]
    fn test_get_termios_with_invalid_fd_fails() {
        assert!(get_termios(-1).is_err());
    }
}
