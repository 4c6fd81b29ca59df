#![forbid(unsafe_code)]

//! Shortcode autocomplete ranking.
//!
//! Keys are split into two tiers: *primary* keys start with the query,
//! *secondary* keys contain it somewhere else. Each tier is sorted
//! lexicographically on its own, primaries come first, and the result is
//! truncated to the limit. The ranking never depends on dictionary iteration
//! order.
//!
//! | Condition | Result |
//! |-----------|--------|
//! | Empty query | Empty list |
//! | Limit of zero | Empty list |
//! | No key contains the query | Empty list |

use crate::shortcode::Dictionary;

/// A ranked suggestion ready for the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'a> {
    pub shortcode: &'a str,
    pub glyph: &'a str,
}

/// Rank shortcodes matching `query`, at most `limit` of them.
#[must_use]
pub fn suggest<'a>(dict: &'a Dictionary, query: &str, limit: usize) -> Vec<&'a str> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut primaries = Vec::new();
    let mut secondaries = Vec::new();
    for key in dict.keys() {
        if key.starts_with(query) {
            primaries.push(key);
        } else if key.contains(query) {
            secondaries.push(key);
        }
    }

    primaries.sort_unstable();
    secondaries.sort_unstable();
    primaries.into_iter().chain(secondaries).take(limit).collect()
}

/// [`suggest`], paired with each shortcode's glyph.
#[must_use]
pub fn suggest_entries<'a>(dict: &'a Dictionary, query: &str, limit: usize) -> Vec<Suggestion<'a>> {
    suggest(dict, query, limit)
        .into_iter()
        .filter_map(|shortcode| {
            dict.glyph(shortcode)
                .map(|glyph| Suggestion { shortcode, glyph })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_matches_sorted() {
        let dict = Dictionary::from_iter([("smile", "🙂"), ("smirk", "😏"), ("grin", "😁")]);
        assert_eq!(suggest(&dict, "smi", 10), vec!["smile", "smirk"]);
    }

    #[test]
    fn prefix_tier_before_substring_tier() {
        let dict = Dictionary::from_iter([("smile", "🙂"), ("awesmile", "🥳")]);
        assert_eq!(suggest(&dict, "smi", 10), vec!["smile", "awesmile"]);
    }

    #[test]
    fn tiers_sorted_independently() {
        let dict = Dictionary::from_iter([
            ("zsmile", "a"),
            ("asmile", "b"),
            ("smiley", "c"),
            ("smile", "d"),
        ]);
        assert_eq!(
            suggest(&dict, "smile", 10),
            vec!["smile", "smiley", "asmile", "zsmile"]
        );
    }

    #[test]
    fn empty_query_yields_nothing() {
        let dict = Dictionary::from_iter([("smile", "🙂")]);
        assert!(suggest(&dict, "", 10).is_empty());
    }

    #[test]
    fn limit_truncates_after_ranking() {
        let dict = Dictionary::from_iter([("cat", "1"), ("cab", "2"), ("scar", "3"), ("car", "4")]);
        assert_eq!(suggest(&dict, "ca", 2), vec!["cab", "car"]);
        assert!(suggest(&dict, "ca", 0).is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        let dict = Dictionary::from_iter([("smile", "🙂")]);
        assert!(suggest(&dict, "xyz", 5).is_empty());
    }

    #[test]
    fn entries_carry_glyphs() {
        let dict = Dictionary::from_iter([("smile", "🙂"), ("smirk", "😏")]);
        let entries = suggest_entries(&dict, "smi", 5);
        assert_eq!(
            entries,
            vec![
                Suggestion {
                    shortcode: "smile",
                    glyph: "🙂"
                },
                Suggestion {
                    shortcode: "smirk",
                    glyph: "😏"
                },
            ]
        );
    }
}
