#![no_main]

use std::collections::HashMap;
use std::convert::Infallible;

use cookie_chunker::{Measure, PercentEncoded, combine, split_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, String)| {
    let (size, value) = input;
    // Every code point fits at 12 or more
    let max = 12 + size as usize;

    let pieces = split_with("key", &value, max).unwrap();

    // Verify: data pieces fit, only the sentinel is empty
    if pieces.len() > 1 {
        let (sentinel, data) = pieces.split_last().unwrap();
        assert!(sentinel.is_sentinel());
        for piece in data {
            assert!(!piece.value().is_empty());
            assert!(PercentEncoded.encoded_len(piece.name(), piece.value()) <= max);
        }
    }

    // Verify: round-trip
    let store: HashMap<_, _> = pieces.iter().map(|p| (p.name(), p.value())).collect();
    let combined = combine("key", |name: &str| {
        Ok::<_, Infallible>(store.get(name).map(|v| v.to_string()))
    });
    assert_eq!(combined, Ok(Some(value.clone())));

    // Verify: determinism
    assert_eq!(pieces, split_with("key", &value, max).unwrap());
});
