//! E2E tests for the ANSI terminal surface.
//!
//! Drives a full editor over `TerminalSurface` with raw key bytes as input and
//! an in-memory writer as output, then replays the output through `vt100` to
//! inspect the resulting screen:
//! - Key decoding through the parser and keymap
//! - Status-line path prompts for save and open
//! - Colors produced by the theme

mod common;

use common::fakes::ScriptedSurface;
use lexedit::backend::{FilePicker, LinePrompt, TerminalSurface};
use lexedit::{Editor, EditorConfig, FsPersistence, InputEvent, Paint, Terminal};
use std::io::Cursor;
use std::path::{Path, PathBuf};

const COLS: u16 = 80;
const ROWS: u16 = 6;

type TermEditor = Editor<TerminalSurface<Vec<u8>, Cursor<Vec<u8>>>, FsPersistence, LinePrompt>;

fn term_editor(input: &[u8]) -> TermEditor {
    let surface = TerminalSurface::new(
        Terminal::new(Vec::new()),
        Cursor::new(input.to_vec()),
        (usize::from(COLS), usize::from(ROWS)),
    );
    Editor::new(
        EditorConfig::default(),
        surface,
        FsPersistence::new(),
        LinePrompt::new(),
    )
}

fn screen_of(editor: &TermEditor) -> vt100::Parser {
    let mut parser = vt100::Parser::new(ROWS, COLS, 0);
    parser.process(editor.surface().terminal().writer());
    parser
}

fn row(parser: &vt100::Parser, index: u16) -> String {
    parser
        .screen()
        .rows(0, COLS)
        .nth(usize::from(index))
        .unwrap_or_default()
        .trim_end()
        .to_string()
}

// ============================================================================
// Full Sessions
// ============================================================================

#[test]
fn test_type_and_save_with_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.py");

    // Type, F2 (SS3 Q), accept the suggested name, Esc.
    let mut editor = term_editor(b"x = 1\r# hi\x1bOQ\r\x1b");
    editor.open_startup(&path);
    assert_eq!(
        editor.session().status(),
        format!("New file {}", path.display())
    );
    editor.run().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x = 1\n# hi");

    let parser = screen_of(&editor);
    assert_eq!(row(&parser, 0), "x = 1");
    assert_eq!(row(&parser, 1), "# hi");
    assert_eq!(
        row(&parser, ROWS - 1),
        format!("File saved as {}", path.display())
    );
}

#[test]
fn test_screen_colors_follow_theme() {
    let mut editor = term_editor(b"def x = 5\x1b[D\x1b");
    editor.run().unwrap();
    let parser = screen_of(&editor);
    let screen = parser.screen();

    let cell = |col: u16| screen.cell(0, col).unwrap();
    // Keywords end up as identifiers: magenta on black.
    assert_eq!(cell(0).contents(), "d");
    assert_eq!(cell(0).fgcolor(), vt100::Color::Idx(5));
    assert_eq!(cell(0).bgcolor(), vt100::Color::Idx(0));
    // Operator: red.
    assert_eq!(cell(6).contents(), "=");
    assert_eq!(cell(6).fgcolor(), vt100::Color::Idx(1));
    // Cursor over the number: black on white.
    assert_eq!(cell(8).contents(), "5");
    assert_eq!(cell(8).fgcolor(), vt100::Color::Idx(0));
    assert_eq!(cell(8).bgcolor(), vt100::Color::Idx(7));
    // Status bar: black on cyan, full width.
    let status = screen.cell(ROWS - 1, COLS - 1).unwrap();
    assert_eq!(status.bgcolor(), vt100::Color::Idx(6));
    assert!(row(&parser, ROWS - 1).starts_with("Press ESC to exit | F2 to save"));
}

#[test]
fn test_open_via_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "alpha\nbeta\n").unwrap();

    // F3 (CSI 13~), type the path, Enter, move down, Esc.
    let mut input = b"junk\x1b[13~".to_vec();
    input.extend_from_slice(path.to_string_lossy().as_bytes());
    input.extend_from_slice(b"\r\x1b[B\x1b");

    let mut editor = term_editor(&input);
    editor.run().unwrap();

    assert_eq!(editor.session().document().lines(), ["alpha", "beta"]);
    assert_eq!(editor.session().cursor().line, 1);
    assert_eq!(editor.session().file_name(), path.as_path());
    assert!(!editor.session().history().can_undo());

    let parser = screen_of(&editor);
    assert_eq!(row(&parser, 0), "alpha");
    assert_eq!(
        row(&parser, ROWS - 1),
        format!("File {} opened", path.display())
    );
}

#[test]
fn test_undo_redo_keys() {
    // Ctrl+Z is 0x1a, Ctrl+Y is 0x19.
    let mut editor = term_editor(b"ab\x1a\x1a\x1a\x19\x1b");
    editor.run().unwrap();
    assert_eq!(editor.session().document().lines(), ["a"]);
    assert_eq!(editor.session().status(), "Redone last action");
}

// ============================================================================
// Line Prompt
// ============================================================================

#[test]
fn test_prompt_edits_and_confirms() {
    let mut surface = ScriptedSurface::new(40, 3).type_text("abc").with_events([
        InputEvent::Backspace,
        InputEvent::ArrowLeft,
        InputEvent::Char('d'),
        InputEvent::Enter,
    ]);
    let mut prompt = LinePrompt::new();
    let answer = prompt
        .prompt_save_path(&mut surface, Path::new("x/"))
        .unwrap();
    assert_eq!(answer, Some(PathBuf::from("x/abd")));

    // The status row shows the label, the input and a cursor cell.
    assert_eq!(surface.status_line(), "Save file as: x/abd");
    assert!(surface.frames.last().unwrap().ends_with("Save file as: x/abd"));
    assert_eq!(surface.paint_at(2, 0), Paint::StatusBar);
    assert_eq!(surface.paint_at(2, "Save file as: x/abd".len()), Paint::Cursor);
}

#[test]
fn test_prompt_cancel_and_blank() {
    let mut surface = ScriptedSurface::new(40, 3)
        .type_text("name")
        .with_events([InputEvent::Escape, InputEvent::Char(' '), InputEvent::Enter]);
    let mut prompt = LinePrompt::new();
    assert_eq!(prompt.prompt_open_path(&mut surface).unwrap(), None);
    assert_eq!(prompt.prompt_open_path(&mut surface).unwrap(), None);
    assert_eq!(surface.remaining_events(), 0);
}
