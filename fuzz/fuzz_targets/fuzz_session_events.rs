//! Fuzz target for edit sequences.
//!
//! Each byte picks an editing command. The cursor must stay inside the
//! document, and history must stay within its depth bound.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexedit::editor::Session;

fuzz_target!(|data: &[u8]| {
    let mut session = Session::default();
    for &byte in data {
        match byte % 10 {
            0 => session.newline(),
            1 => {
                session.backspace();
            }
            2 => session.move_left(),
            3 => session.move_right(),
            4 => session.move_up(),
            5 => session.move_down(),
            6 => {
                let _ = session.undo();
            }
            7 => {
                let _ = session.redo();
            }
            8 if byte % 3 == 0 => session.insert_char('日'),
            _ => session.insert_char(char::from(b'a' + byte % 26)),
        }
        session.recompute_viewport(5, 8);

        let cursor = session.cursor();
        assert!(cursor.is_valid_in(session.document()));
        assert!(session.history().undo_len() <= session.history().max_depth());
        let viewport = session.viewport();
        assert!(viewport.contains(session.display_cursor(), 5, 8));
    }
});
