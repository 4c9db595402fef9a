//! In-memory collaborators for driving an `Editor` without a terminal.
//!
//! - `ScriptedSurface`: a character grid fed from a queue of input events
//! - `MemoryPersistence`: files kept in a map, with optional write failure
//! - `ScriptedPicker`: canned answers for open/save prompts

use lexedit::backend::{FilePicker, Persistence, Surface};
use lexedit::{Error, InputEvent, Paint, Result};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

/// Marks the second cell of a wide char.
const WIDE_TAIL: char = '\0';

/// Character grid surface with scripted input.
///
/// Chars take as many cells as their display width. Running out of events is
/// an I/O error, like a closed terminal.
#[derive(Debug)]
pub struct ScriptedSurface {
    cols: usize,
    rows: usize,
    events: VecDeque<InputEvent>,
    cells: Vec<Vec<(char, Paint)>>,
    /// Screen text captured at every `present`.
    pub frames: Vec<String>,
}

impl ScriptedSurface {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            events: VecDeque::new(),
            cells: vec![vec![(' ', Paint::Plain); cols]; rows],
            frames: Vec::new(),
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn type_text(mut self, text: &str) -> Self {
        self.events.extend(text.chars().map(InputEvent::Char));
        self
    }

    pub fn remaining_events(&self) -> usize {
        self.events.len()
    }

    /// One row with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        let text: String = self.cells[row]
            .iter()
            .map(|(ch, _)| *ch)
            .filter(|ch| *ch != WIDE_TAIL)
            .collect();
        text.trim_end().to_string()
    }

    /// Whole screen, rows joined by newlines, trailing blanks removed.
    pub fn screen_text(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string()
    }

    pub fn paint_at(&self, row: usize, col: usize) -> Paint {
        self.cells[row][col].1
    }

    pub fn status_line(&self) -> String {
        self.row_text(self.rows - 1)
    }
}

impl Surface for ScriptedSurface {
    fn size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill((' ', Paint::Plain));
        }
    }

    fn place_styled_text(&mut self, row: usize, col: usize, text: &str, paint: Paint) {
        let Some(cells) = self.cells.get_mut(row) else {
            return;
        };
        let mut x = col;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                continue;
            }
            if x + width > cells.len() {
                break;
            }
            cells[x] = (ch, paint);
            for tail in &mut cells[x + 1..x + width] {
                *tail = (WIDE_TAIL, paint);
            }
            x += width;
        }
    }

    fn present(&mut self) -> Result<()> {
        self.frames.push(self.screen_text());
        Ok(())
    }

    fn next_input_event(&mut self) -> Result<InputEvent> {
        self.events.pop_front().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ))
        })
    }
}

/// Files held in memory.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    pub files: HashMap<PathBuf, Vec<String>>,
    pub fail_writes: bool,
}

impl MemoryPersistence {
    pub fn with_file(mut self, path: &str, lines: &[&str]) -> Self {
        self.files.insert(
            PathBuf::from(path),
            lines.iter().map(|line| (*line).to_string()).collect(),
        );
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn file(&self, path: &str) -> Option<&Vec<String>> {
        self.files.get(Path::new(path))
    }
}

impl Persistence for MemoryPersistence {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::FileNotFound {
                path: path.to_path_buf(),
            })
    }

    fn write_lines(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )));
        }
        self.files.insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}

/// Picker answering from queues. An empty queue answers "cancelled".
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    pub open_answers: VecDeque<Option<PathBuf>>,
    pub save_answers: VecDeque<Option<PathBuf>>,
    /// Paths suggested to every save prompt, in order.
    pub save_suggestions: Vec<PathBuf>,
}

impl ScriptedPicker {
    pub fn open(mut self, answer: Option<&str>) -> Self {
        self.open_answers.push_back(answer.map(PathBuf::from));
        self
    }

    pub fn save(mut self, answer: Option<&str>) -> Self {
        self.save_answers.push_back(answer.map(PathBuf::from));
        self
    }
}

impl FilePicker for ScriptedPicker {
    fn prompt_open_path(&mut self, _surface: &mut dyn Surface) -> Result<Option<PathBuf>> {
        Ok(self.open_answers.pop_front().flatten())
    }

    fn prompt_save_path(
        &mut self,
        _surface: &mut dyn Surface,
        suggested: &Path,
    ) -> Result<Option<PathBuf>> {
        self.save_suggestions.push(suggested.to_path_buf());
        Ok(self.save_answers.pop_front().flatten())
    }
}
