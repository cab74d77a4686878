#![no_main]

use cookie_chunker::{PieceName, is_piece_of};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    let parsed = PieceName::parse(name);

    // Verify: parsing is lossless
    assert_eq!(parsed.to_string(), name);

    // Verify: a name always belongs to its own parsed base
    assert!(is_piece_of(name, parsed.base));
    assert!(is_piece_of(name, name));
});
