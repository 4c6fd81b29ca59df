#![no_main]

use libfuzzer_sys::fuzz_target;
use qj_text::column_width;
use qj_text::wrap::{break_offsets, split_at_breaks, wrap_text};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 2048 {
        return;
    }

    for max_width in [0, 1, 2, 10, 40, 80] {
        let lines = wrap_text(text, max_width);
        assert!(lines.len() >= text.split('\n').count());

        for logical in text.split('\n') {
            let breaks = break_offsets(logical, max_width);
            let segments = split_at_breaks(logical, &breaks);
            assert_eq!(segments.concat(), logical, "segments must reassemble");
            if max_width > 0 {
                for segment in &segments {
                    assert!(column_width(segment) <= max_width, "{segment:?} > {max_width}");
                }
            }
        }
    }
});
