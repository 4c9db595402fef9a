//! Line-oriented document storage.
//!
//! A [`Document`] is an ordered list of lines. It always holds at least one
//! line and no line ever contains a line terminator. Columns are counted in
//! `char`s, so every edit converts a column to a byte index before touching
//! the underlying `String`. Screen positions are display cells, measured with
//! [`char_width`].

use unicode_width::UnicodeWidthChar;

use crate::text::cursor::Cursor;

/// Display cells taken by `ch`. Control chars are drawn as one blank cell.
#[must_use]
pub fn char_width(ch: char) -> usize {
    if ch.is_control() { 1 } else { ch.width().unwrap_or(0) }
}

/// In-memory text content as an ordered list of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a document from lines.
    ///
    /// An empty list becomes a single empty line. Lines carrying embedded
    /// terminators are split so the no-terminator invariant holds.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for line in lines {
            let line = line.as_ref();
            if line.contains(['\n', '\r']) {
                let normalized = line.replace("\r\n", "\n");
                out.extend(
                    normalized
                        .lines()
                        .flat_map(|part| part.split('\r'))
                        .map(str::to_owned),
                );
            } else {
                out.push(line.to_owned());
            }
        }
        if out.is_empty() {
            out.push(String::new());
        }
        Self { lines: out }
    }

    /// Build a document from flat newline-joined text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Replace the whole content.
    pub fn replace(&mut self, lines: Vec<String>) {
        *self = Self::from_lines(lines);
    }

    /// Number of lines (always at least 1).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line content, or `None` past the end.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Length of a line in chars; 0 past the end.
    #[must_use]
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, |line| line.chars().count())
    }

    /// Display cell where char column `col` of line `index` starts.
    ///
    /// Columns past the end of the line count as the line's full width.
    #[must_use]
    pub fn display_col(&self, index: usize, col: usize) -> usize {
        self.lines
            .get(index)
            .map_or(0, |line| line.chars().take(col).map(char_width).sum())
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-joined content without a trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether the document is a single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Insert `ch` at `pos`.
    pub fn insert_char(&mut self, pos: Cursor, ch: char) {
        debug_assert!(ch != '\n' && ch != '\r', "line terminators go through split_line");
        debug_assert!(self.contains(pos), "insert position {pos:?} out of range");
        let line = &mut self.lines[pos.line];
        let at = byte_index(line, pos.col);
        line.insert(at, ch);
    }

    /// Split the line at `pos` into `[0, col)` and `[col, end)`.
    pub fn split_line(&mut self, pos: Cursor) {
        debug_assert!(self.contains(pos), "split position {pos:?} out of range");
        let line = &mut self.lines[pos.line];
        let at = byte_index(line, pos.col);
        let tail = line.split_off(at);
        self.lines.insert(pos.line + 1, tail);
    }

    /// Append line `index` to the line above it and remove it.
    ///
    /// Returns the column in the previous line where the joined text starts,
    /// or `None` (with no change) for the first line.
    pub fn join_with_previous(&mut self, index: usize) -> Option<usize> {
        if index == 0 || index >= self.lines.len() {
            return None;
        }
        let current = self.lines.remove(index);
        let previous = &mut self.lines[index - 1];
        let join_col = previous.chars().count();
        previous.push_str(&current);
        Some(join_col)
    }

    /// Remove the char immediately before `pos`.
    ///
    /// Returns the removed char, or `None` (with no change) at column 0.
    pub fn delete_char_before(&mut self, pos: Cursor) -> Option<char> {
        if pos.col == 0 {
            return None;
        }
        debug_assert!(self.contains(pos), "delete position {pos:?} out of range");
        let line = &mut self.lines[pos.line];
        let at = byte_index(line, pos.col - 1);
        Some(line.remove(at))
    }

    fn contains(&self, pos: Cursor) -> bool {
        pos.line < self.lines.len() && pos.col <= self.line_len(pos.line)
    }
}

/// Byte index of char column `col`, clamped to the end of `line`.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}
