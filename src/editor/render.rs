//! Frame composition.
//!
//! Text rows show the document from the viewport offsets, highlighted by the
//! compositor. Columns are display cells. Lines are drawn to the full surface
//! width even though the viewport scrolls `horizontal_margin` columns early.
//! The bottom row is the status bar, except on a single-row surface where the
//! text row takes it.

use unicode_width::UnicodeWidthStr;

use crate::backend::Surface;
use crate::config::text_rows;
use crate::editor::session::Session;
use crate::highlight::{Compositor, Paint};
use crate::text::char_width;

/// Draw one frame of `session` onto `surface` (without presenting it).
pub fn draw_frame(surface: &mut dyn Surface, session: &Session, compositor: &Compositor) {
    surface.clear();
    let (cols, rows) = surface.size();
    let text_rows = text_rows(rows).min(rows);
    let viewport = session.viewport();
    let cursor = session.cursor();

    for screen_row in 0..text_rows {
        let index = viewport.row_offset + screen_row;
        let Some(line) = session.document().line(index) else {
            break;
        };
        let cursor_col = (index == cursor.line).then_some(cursor.col);
        draw_line(surface, screen_row, line, cursor_col, viewport.col_offset, cols, compositor);
    }

    if rows > text_rows {
        draw_status(surface, session.status());
    }
}

/// Draw `line` starting at display cell `col_offset`, merging equal paints
/// into runs. A wide char cut by the offset is left out.
fn draw_line(
    surface: &mut dyn Surface,
    row: usize,
    line: &str,
    cursor_col: Option<usize>,
    col_offset: usize,
    cols: usize,
    compositor: &Compositor,
) {
    let paints = compositor.paint(line, cursor_col);
    let mut cell = 0;
    let mut run = String::new();
    let mut run_start = 0;
    let mut run_paint = Paint::Plain;
    let mut truncated = false;

    for (ch, paint) in line.chars().zip(paints) {
        let w = char_width(ch);
        let start = cell;
        cell += w;
        if start < col_offset {
            continue;
        }
        let x = start - col_offset;
        if x + w > cols {
            truncated = true;
            break;
        }
        if paint != run_paint && !run.is_empty() {
            surface.place_styled_text(row, run_start, &run, run_paint);
            run.clear();
        }
        if run.is_empty() {
            run_start = x;
            run_paint = paint;
        }
        run.push(displayable(ch));
    }
    if !run.is_empty() {
        surface.place_styled_text(row, run_start, &run, run_paint);
    }

    // The overlay only covers existing chars; at end of line draw a blank
    // cursor cell so the cursor stays visible.
    if cursor_col == Some(line.chars().count()) && !truncated && cell >= col_offset {
        let x = cell - col_offset;
        if x < cols {
            surface.place_styled_text(row, x, " ", Paint::Cursor);
        }
    }
}

/// Draw `status` on the bottom row, padded to the full width.
pub fn draw_status(surface: &mut dyn Surface, status: &str) {
    let (cols, rows) = surface.size();
    if rows == 0 {
        return;
    }
    let mut text: String = status.chars().map(displayable).collect();
    let width = text.width();
    if width < cols {
        text.push_str(&" ".repeat(cols - width));
    }
    surface.place_styled_text(rows - 1, 0, &text, Paint::StatusBar);
}

/// Control chars such as tabs occupy one blank cell.
fn displayable(ch: char) -> char {
    if ch.is_control() { ' ' } else { ch }
}
