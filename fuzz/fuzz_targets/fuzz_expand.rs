#![no_main]

use libfuzzer_sys::fuzz_target;
use qj_text::{Dictionary, expand, suggest};

fuzz_target!(|input: (Vec<(String, String)>, String)| {
    let (rows, text) = input;
    if text.len() > 2048 || rows.len() > 64 {
        return;
    }
    let dict: Dictionary = rows.into_iter().collect();

    let expanded = expand(&text, &dict);
    if dict.is_empty() {
        assert_eq!(expanded, text.as_str());
    }

    for query in text.split(':').take(8) {
        let found = suggest(&dict, query, 5);
        assert!(found.len() <= 5);
        for key in found {
            assert!(key.contains(query));
        }
    }
});
