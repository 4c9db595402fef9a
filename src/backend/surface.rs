//! ANSI terminal implementation of [`Surface`].

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use unicode_width::UnicodeWidthChar;

use crate::backend::Surface;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::highlight::{Paint, Theme};
use crate::input::{InputEvent, InputParser, KeyEvent, Keymap, ParseError};
use crate::terminal::{Terminal, is_tty, terminal_size};

/// An empty read faster than this did not wait for the read timeout.
const QUICK_EMPTY_READ: Duration = Duration::from_millis(20);

/// Consecutive quick empty reads taken as a hung-up terminal.
const MAX_QUICK_EMPTY_READS: u32 = 16;

/// Text placed in the current frame.
#[derive(Clone, Debug)]
struct Placement {
    row: usize,
    col: usize,
    width: usize,
    text: String,
    paint: Paint,
}

/// Surface that draws with ANSI sequences and decodes key bytes from `R`.
///
/// Each [`Surface::present`] redraws the whole frame inside a synchronized
/// update. Placements that fully cover an earlier one on the same row
/// replace it.
pub struct TerminalSurface<W: Write, R: Read> {
    terminal: Terminal<W>,
    input: R,
    parser: InputParser,
    keymap: Keymap,
    theme: Theme,
    pending: Vec<u8>,
    frame: Vec<Placement>,
    size: (usize, usize),
    /// Attached to a real TTY: an empty read is a timeout rather than end of
    /// input, and the size follows the terminal.
    live: bool,
    quick_empty_reads: u32,
}

/// Surface on the process's own terminal.
pub type StdioSurface = TerminalSurface<io::Stdout, io::Stdin>;

impl StdioSurface {
    /// Take over stdin/stdout: raw mode, optional alternate screen, hidden
    /// cursor. Everything is restored when the surface is dropped.
    pub fn stdio(config: &EditorConfig) -> Result<Self> {
        if !is_tty(&io::stdin()) {
            return Err(io::Error::other("stdin is not a terminal").into());
        }
        let mut terminal = Terminal::new(io::stdout());
        terminal.enter_raw_mode()?;
        if config.use_alt_screen {
            terminal.enter_alt_screen()?;
        }
        terminal.hide_cursor()?;
        terminal.flush()?;

        let (cols, rows) = terminal_size()?;
        debug!(cols, rows, "terminal surface attached");
        let mut surface = Self::new(terminal, io::stdin(), (cols.into(), rows.into()))
            .with_keymap(config.keymap.clone());
        surface.live = true;
        Ok(surface)
    }
}

impl<W: Write, R: Read> TerminalSurface<W, R> {
    /// Surface of a fixed `(cols, rows)` size. Input is read until `R` runs
    /// dry, after which [`Surface::next_input_event`] fails.
    pub fn new(terminal: Terminal<W>, input: R, size: (usize, usize)) -> Self {
        Self {
            terminal,
            input,
            parser: InputParser::new(),
            keymap: Keymap::default(),
            theme: Theme::default(),
            pending: Vec::new(),
            frame: Vec::new(),
            size,
            live: false,
            quick_empty_reads: 0,
        }
    }

    #[must_use]
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn terminal(&self) -> &Terminal<W> {
        &self.terminal
    }

    /// Read more input. A quiet read resolves a pending lone Escape.
    ///
    /// A live terminal that keeps returning empty reads without waiting for
    /// the read timeout has hung up and ends the input.
    fn fill(&mut self) -> Result<Option<KeyEvent>> {
        let mut buf = [0u8; 64];
        let started = Instant::now();
        let n = match self.input.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if n > 0 {
            self.quick_empty_reads = 0;
            self.pending.extend_from_slice(&buf[..n]);
            return Ok(None);
        }
        if let Some((key, consumed)) = self.parser.flush(&self.pending) {
            self.pending.drain(..consumed);
            return Ok(Some(key));
        }
        if self.live {
            if started.elapsed() >= QUICK_EMPTY_READ {
                self.quick_empty_reads = 0;
                return Ok(None);
            }
            self.quick_empty_reads += 1;
            if self.quick_empty_reads < MAX_QUICK_EMPTY_READS {
                return Ok(None);
            }
            warn!(reads = self.quick_empty_reads, "terminal input hung up");
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "terminal hung up").into())
        } else {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into())
        }
    }

    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            match self.parser.parse(&self.pending) {
                Ok((key, consumed)) => {
                    self.pending.drain(..consumed);
                    return Ok(key);
                }
                Err(ParseError::Empty | ParseError::Incomplete) => {
                    if let Some(key) = self.fill()? {
                        return Ok(key);
                    }
                }
                Err(ParseError::UnrecognizedSequence(seq)) => {
                    debug!(?seq, "unrecognized escape sequence");
                    self.pending.drain(..seq.len().min(self.pending.len()));
                }
                Err(ParseError::InvalidUtf8) => {
                    warn!(byte = self.pending[0], "dropping invalid UTF-8 input byte");
                    self.pending.remove(0);
                }
            }
        }
    }
}

impl<W: Write, R: Read> Surface for TerminalSurface<W, R> {
    fn size(&self) -> (usize, usize) {
        self.size
    }

    fn clear(&mut self) {
        self.frame.clear();
        if self.live {
            if let Ok((cols, rows)) = terminal_size() {
                self.size = (cols.into(), rows.into());
            }
        }
    }

    fn place_styled_text(&mut self, row: usize, col: usize, text: &str, paint: Paint) {
        let (cols, rows) = self.size;
        if row >= rows || col >= cols {
            return;
        }
        let mut width = 0;
        let mut clipped = String::new();
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if col + width + w > cols {
                break;
            }
            width += w;
            clipped.push(ch);
        }
        if clipped.is_empty() {
            return;
        }
        self.frame
            .retain(|p| !(p.row == row && p.col >= col && p.col + p.width <= col + width));
        self.frame.push(Placement {
            row,
            col,
            width,
            text: clipped,
            paint,
        });
    }

    fn present(&mut self) -> Result<()> {
        self.terminal.begin_sync()?;
        self.terminal.clear()?;
        for placement in &self.frame {
            self.terminal.move_cursor(placement.row, placement.col)?;
            let style = self.theme.style_for(placement.paint);
            self.terminal.write_styled(&style, &placement.text)?;
        }
        self.terminal.end_sync()?;
        self.terminal.flush()?;
        Ok(())
    }

    fn next_input_event(&mut self) -> Result<InputEvent> {
        loop {
            let key = self.next_key()?;
            match self.keymap.resolve(&key) {
                Some(event) => return Ok(event),
                None => debug!(?key, "unbound key ignored"),
            }
        }
    }
}
