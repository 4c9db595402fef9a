//! ANSI sequence parser for terminal key input.
//!
//! Parses raw bytes from the terminal into [`KeyEvent`]s. Supports:
//! - Control bytes (Ctrl+letter, Enter, Tab, Backspace)
//! - CSI sequences with modifiers (arrows, Home/End, tilde keys)
//! - SS3 sequences (F1-F4, application-mode arrows)
//! - Multi-byte UTF-8 characters

// Parser has many match arms for different terminal sequences
#![allow(clippy::match_same_arms)]
// Self is kept on helpers for symmetry with `parse`
#![allow(clippy::unused_self)]

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Error type for input parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input buffer is empty.
    Empty,
    /// Incomplete sequence (need more bytes).
    Incomplete,
    /// Unrecognized escape sequence; the bytes are the whole sequence.
    UnrecognizedSequence(Vec<u8>),
    /// Invalid UTF-8 in input.
    InvalidUtf8,
}

/// Result of parsing input: the event and the number of bytes consumed.
pub type ParseResult = Result<(KeyEvent, usize), ParseError>;

/// Stateless byte-to-key parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputParser;

impl InputParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse one key from the front of `input`.
    ///
    /// Call repeatedly on the remaining bytes until `Err(ParseError::Empty)`
    /// or `Err(ParseError::Incomplete)` is returned.
    pub fn parse(&self, input: &[u8]) -> ParseResult {
        let Some(&first) = input.first() else {
            return Err(ParseError::Empty);
        };

        match first {
            0x1b => self.parse_escape(input),
            b'\r' | b'\n' => Ok((KeyEvent::key(KeyCode::Enter), 1)),
            b'\t' => Ok((KeyEvent::key(KeyCode::Tab), 1)),
            0x08 | 0x7f => Ok((KeyEvent::key(KeyCode::Backspace), 1)),
            0x00 => Ok((KeyEvent::with_ctrl(KeyCode::Char(' ')), 1)),
            0x01..=0x1a => {
                let c = (first - 1 + b'a') as char;
                Ok((KeyEvent::with_ctrl(KeyCode::Char(c)), 1))
            }
            0x1c..=0x1f => {
                let c = (first - 0x1c + b'\\') as char;
                Ok((KeyEvent::with_ctrl(KeyCode::Char(c)), 1))
            }
            0x20..=0x7e => Ok((KeyEvent::char(first as char), 1)),
            0x80..=0xff => self.parse_utf8(input),
        }
    }

    /// Resolve input that stayed incomplete after the terminal went quiet.
    ///
    /// A lone ESC byte can only be told apart from the start of a sequence by
    /// waiting; once no more bytes arrive it is the Escape key.
    #[must_use]
    pub fn flush(&self, input: &[u8]) -> Option<(KeyEvent, usize)> {
        (input.first() == Some(&0x1b)).then(|| (KeyEvent::key(KeyCode::Esc), 1))
    }

    fn parse_escape(&self, input: &[u8]) -> ParseResult {
        let Some(&second) = input.get(1) else {
            return Err(ParseError::Incomplete);
        };

        match second {
            b'[' => self.parse_csi(input),
            b'O' => self.parse_ss3(input),
            0x20..=0x7e => {
                let key = KeyEvent::new(KeyCode::Char(second as char), KeyModifiers::ALT);
                Ok((key, 2))
            }
            _ => Ok((KeyEvent::key(KeyCode::Esc), 1)),
        }
    }

    /// Parse a CSI sequence (ESC [ params final).
    fn parse_csi(&self, input: &[u8]) -> ParseResult {
        let Some(rel_end) = input[2..]
            .iter()
            .position(|b| (0x40..=0x7e).contains(b))
        else {
            return Err(ParseError::Incomplete);
        };
        let end = rel_end + 2;
        let params = &input[2..end];
        let consumed = end + 1;

        let code = match input[end] {
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'~' => return self.parse_tilde_key(params, consumed),
            _ => return Err(ParseError::UnrecognizedSequence(input[..consumed].to_vec())),
        };
        Ok((KeyEvent::new(code, self.parse_modifiers(params)?), consumed))
    }

    /// Modifier parameter `N` in `1;N`: N - 1 is a shift/alt/ctrl bitmask.
    fn parse_modifiers(&self, params: &[u8]) -> Result<KeyModifiers, ParseError> {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let Some(n) = s.split(';').nth(1).and_then(|p| p.parse::<u8>().ok()) else {
            return Ok(KeyModifiers::empty());
        };
        let n = n.saturating_sub(1);
        let mut mods = KeyModifiers::empty();
        if n & 1 != 0 {
            mods |= KeyModifiers::SHIFT;
        }
        if n & 2 != 0 {
            mods |= KeyModifiers::ALT;
        }
        if n & 4 != 0 {
            mods |= KeyModifiers::CTRL;
        }
        Ok(mods)
    }

    /// Parse tilde key sequences (ESC [ num ~).
    fn parse_tilde_key(&self, params: &[u8], consumed: usize) -> ParseResult {
        let s = std::str::from_utf8(params).map_err(|_| ParseError::InvalidUtf8)?;
        let num: u8 = s.split(';').next().and_then(|p| p.parse().ok()).unwrap_or(0);

        let code = match num {
            1 | 7 => KeyCode::Home,
            2 => KeyCode::Insert,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            11..=15 => KeyCode::F(num - 10),
            17..=21 => KeyCode::F(num - 11),
            23 | 24 => KeyCode::F(num - 12),
            _ => {
                let mut seq = b"\x1b[".to_vec();
                seq.extend_from_slice(params);
                seq.push(b'~');
                return Err(ParseError::UnrecognizedSequence(seq));
            }
        };
        Ok((KeyEvent::new(code, self.parse_modifiers(params)?), consumed))
    }

    /// Parse SS3 sequences (ESC O final).
    fn parse_ss3(&self, input: &[u8]) -> ParseResult {
        let Some(&last) = input.get(2) else {
            return Err(ParseError::Incomplete);
        };

        let code = match last {
            b'P' => KeyCode::F(1),
            b'Q' => KeyCode::F(2),
            b'R' => KeyCode::F(3),
            b'S' => KeyCode::F(4),
            b'A' => KeyCode::Up,
            b'B' => KeyCode::Down,
            b'C' => KeyCode::Right,
            b'D' => KeyCode::Left,
            b'H' => KeyCode::Home,
            b'F' => KeyCode::End,
            b'M' => KeyCode::Enter,
            _ => return Err(ParseError::UnrecognizedSequence(input[..3].to_vec())),
        };
        Ok((KeyEvent::key(code), 3))
    }

    /// Parse one multi-byte UTF-8 character.
    fn parse_utf8(&self, input: &[u8]) -> ParseResult {
        let width = match input[0] {
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Err(ParseError::InvalidUtf8),
        };
        if input.len() < width {
            return Err(ParseError::Incomplete);
        }
        let s = std::str::from_utf8(&input[..width]).map_err(|_| ParseError::InvalidUtf8)?;
        let c = s.chars().next().ok_or(ParseError::InvalidUtf8)?;
        Ok((KeyEvent::char(c), width))
    }
}
