use std::path::{Path, PathBuf};

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::backend::{FilePicker, Surface};
use crate::error::Result;
use crate::highlight::Paint;
use crate::input::InputEvent;

/// Label shown when asking for a path to open.
pub const OPEN_PROMPT: &str = "Open file: ";

/// Label shown when asking for a path to save to.
pub const SAVE_PROMPT: &str = "Save file as: ";

/// [`FilePicker`] that reads a path typed on the status row.
///
/// Enter confirms, Escape cancels, Backspace edits. Blank input counts as
/// cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinePrompt;

impl LinePrompt {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Read one line of text after `label`, starting from `initial`.
    pub fn read_line(
        &self,
        surface: &mut dyn Surface,
        label: &str,
        initial: &str,
    ) -> Result<Option<String>> {
        let mut input = initial.to_string();
        loop {
            draw(surface, label, &input)?;
            match surface.next_input_event()? {
                InputEvent::Enter => {
                    let trimmed = input.trim();
                    return Ok((!trimmed.is_empty()).then(|| trimmed.to_string()));
                }
                InputEvent::Escape => return Ok(None),
                InputEvent::Backspace => {
                    input.pop();
                }
                InputEvent::Char(c) => input.push(c),
                other => debug!(event = other.name(), "ignored in prompt"),
            }
        }
    }
}

/// Overwrite the status row with the prompt and a cursor cell.
fn draw(surface: &mut dyn Surface, label: &str, input: &str) -> Result<()> {
    let (cols, rows) = surface.size();
    let row = rows.saturating_sub(1);
    let text = format!("{label}{input}");
    let used = text.width();
    surface.place_styled_text(row, 0, &text, Paint::StatusBar);
    surface.place_styled_text(row, used, " ", Paint::Cursor);
    if cols > used + 1 {
        let pad = " ".repeat(cols - used - 1);
        surface.place_styled_text(row, used + 1, &pad, Paint::StatusBar);
    }
    surface.present()
}

impl FilePicker for LinePrompt {
    fn prompt_open_path(&mut self, surface: &mut dyn Surface) -> Result<Option<PathBuf>> {
        Ok(self.read_line(surface, OPEN_PROMPT, "")?.map(PathBuf::from))
    }

    fn prompt_save_path(
        &mut self,
        surface: &mut dyn Surface,
        suggested: &Path,
    ) -> Result<Option<PathBuf>> {
        let initial = suggested.to_string_lossy();
        Ok(self
            .read_line(surface, SAVE_PROMPT, &initial)?
            .map(PathBuf::from))
    }
}
