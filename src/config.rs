//! Editor configuration.

use crate::input::Keymap;
use crate::text::DEFAULT_MAX_HISTORY_DEPTH;

/// Default name used when saving a document that was never opened from disk.
pub const DEFAULT_FILE_NAME: &str = "untitled.txt";

/// Columns kept free on the right before horizontal scrolling kicks in.
pub const DEFAULT_HORIZONTAL_MARGIN: usize = 5;

/// Text rows on a surface `rows` tall: all but the status bar, at least one.
#[must_use]
pub fn text_rows(rows: usize) -> usize {
    rows.saturating_sub(1).max(1)
}

/// Options for an editing session and its terminal surface.
#[derive(Clone, Debug)]
pub struct EditorConfig {
    /// Maximum number of undo snapshots kept.
    pub history_depth: usize,
    /// Right-hand columns excluded from the visible text area.
    pub horizontal_margin: usize,
    /// File name suggested by the first save.
    pub default_file_name: String,
    /// Draw on the alternate screen buffer.
    pub use_alt_screen: bool,
    pub keymap: Keymap,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_MAX_HISTORY_DEPTH,
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            default_file_name: DEFAULT_FILE_NAME.to_string(),
            use_alt_screen: true,
            keymap: Keymap::default(),
        }
    }
}

impl EditorConfig {
    /// Visible text area `(rows, cols)` for a surface of `cols` x `rows`.
    ///
    /// The bottom row is the status bar. Never returns a zero extent.
    #[must_use]
    pub fn text_area(&self, cols: usize, rows: usize) -> (usize, usize) {
        let text_cols = cols.saturating_sub(self.horizontal_margin).max(1);
        (text_rows(rows), text_cols)
    }
}
