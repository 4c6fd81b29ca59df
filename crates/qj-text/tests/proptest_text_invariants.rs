//! Property-based invariant tests for wrapping, expansion, and ranking.
//!
//! 1. Break offsets are strictly increasing and in bounds.
//! 2. Lines that fit produce no breaks.
//! 3. Reassembling the segments reproduces the line exactly.
//! 4. Every segment fits in the wrap width.
//! 5. Expansion with an empty dictionary is the identity.
//! 6. Suggestions are bounded, contain the query, and rank prefix matches first.

use qj_text::column_width;
use qj_text::shortcode::{Dictionary, expand};
use qj_text::suggest::suggest;
use qj_text::wrap::{break_offsets, reassemble, split_at_breaks, wrap_text};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'z'),
            2 => Just(' '),
            1 => Just('é'),
            1 => Just('🙂'),
        ],
        0..120,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_dictionary() -> impl Strategy<Value = Dictionary> {
    prop::collection::vec(("[a-e]{1,6}", "[A-Z]"), 0..24).prop_map(Dictionary::from_iter)
}

// ── Wrapping ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn offsets_strictly_increasing_and_in_bounds(line in arb_line(), width in 1usize..40) {
        let len = column_width(&line);
        let breaks = break_offsets(&line, width);
        for pair in breaks.windows(2) {
            prop_assert!(pair[0].offset < pair[1].offset);
        }
        for brk in &breaks {
            prop_assert!(brk.offset < len);
        }
        if len <= width {
            prop_assert!(breaks.is_empty());
        }
    }

    #[test]
    fn reassembly_is_lossless(line in arb_line(), width in 1usize..40) {
        let breaks = break_offsets(&line, width);
        prop_assert_eq!(reassemble(&line, &breaks), line);
    }

    #[test]
    fn segments_fit_width(line in arb_line(), width in 1usize..40) {
        let breaks = break_offsets(&line, width);
        for segment in split_at_breaks(&line, &breaks) {
            prop_assert!(column_width(&segment) <= width);
        }
    }

    #[test]
    fn wrap_text_keeps_every_logical_line(
        lines in prop::collection::vec(arb_line(), 1..5),
        width in 1usize..30,
    ) {
        let text = lines.join("\n");
        let wrapped = wrap_text(&text, width);
        prop_assert!(wrapped.len() >= lines.len());
        for line in &wrapped {
            prop_assert!(column_width(line) <= width);
        }
    }
}

// ── Expansion ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn empty_dictionary_expansion_is_identity(text in "[a-z :]{0,60}") {
        let out = expand(&text, &Dictionary::new());
        prop_assert_eq!(out.as_ref(), text.as_str());
    }

    #[test]
    fn expansion_never_grows_colon_count(text in "[a-e :]{0,60}", dict in arb_dictionary()) {
        let out = expand(&text, &dict);
        prop_assert!(out.matches(':').count() <= text.matches(':').count());
    }
}

// ── Ranking ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn suggestions_bounded_and_ranked(
        dict in arb_dictionary(),
        query in "[a-e]{1,3}",
        limit in 0usize..10,
    ) {
        let ranked = suggest(&dict, &query, limit);
        prop_assert!(ranked.len() <= limit);
        for key in &ranked {
            prop_assert!(key.contains(query.as_str()));
        }
        // Once a substring-only match appears, no prefix match follows.
        if let Some(first_secondary) = ranked.iter().position(|k| !k.starts_with(query.as_str())) {
            prop_assert!(ranked[first_secondary..].iter().all(|k| !k.starts_with(query.as_str())));
        }
    }

    #[test]
    fn ranking_independent_of_insertion_order(
        pairs in prop::collection::vec(("[a-e]{1,6}", "[A-Z]"), 0..24),
        query in "[a-e]{1,2}",
    ) {
        let forward: Dictionary = pairs.iter().cloned().collect();
        let backward: Dictionary = pairs.iter().rev().cloned().collect();
        // Duplicate keys may resolve to different glyphs, but keys are identical.
        prop_assert_eq!(suggest(&forward, &query, 10), suggest(&backward, &query, 10));
    }
}
