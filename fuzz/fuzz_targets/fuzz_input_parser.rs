//! Fuzz target for the key input parser.
//!
//! Arbitrary terminal bytes must never panic the parser, and every successful
//! parse must make progress.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lexedit::input::{InputParser, Keymap, ParseError};

fuzz_target!(|data: &[u8]| {
    let parser = InputParser::new();
    let keymap = Keymap::default();
    let mut remaining = data;

    while !remaining.is_empty() {
        match parser.parse(remaining) {
            Ok((key, consumed)) => {
                assert!(consumed > 0 && consumed <= remaining.len());
                let _ = keymap.resolve(&key);
                remaining = &remaining[consumed..];
            }
            Err(ParseError::Empty) => break,
            Err(ParseError::Incomplete) => match parser.flush(remaining) {
                Some((_, consumed)) => remaining = &remaining[consumed..],
                None => break,
            },
            Err(ParseError::UnrecognizedSequence(seq)) => {
                assert!(!seq.is_empty());
                remaining = &remaining[seq.len().min(remaining.len())..];
            }
            Err(ParseError::InvalidUtf8) => remaining = &remaining[1..],
        }
    }
});
