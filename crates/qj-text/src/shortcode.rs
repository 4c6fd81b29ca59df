#![forbid(unsafe_code)]

//! Shortcode dictionary and `:code:` expansion.
//!
//! A shortcode is a colon-delimited alias such as `:smile:` that maps to a
//! glyph. Expansion is a display-only transform ("live preview"); persisted
//! entries always keep the raw shortcode text.
//!
//! # Scanning
//!
//! The scan runs left to right and treats every colon as a potential span
//! start. When the text between two colons is a known shortcode the whole
//! span, colons included, becomes the glyph. On a miss the opening colon and
//! the text up to the closing colon are emitted literally and the closing
//! colon is retried as the opener of the next span, so `10:30 :smile:`
//! still expands the smile.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

/// Immutable-after-load mapping from shortcode to glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: FxHashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(glyph, shortcode)` rows, the column order of the CSV
    /// source.
    pub fn from_rows<I, G, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (G, S)>,
        G: Into<String>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        for (glyph, shortcode) in rows {
            dict.insert(shortcode, glyph);
        }
        dict
    }

    /// Insert a mapping. Empty shortcodes are rejected.
    ///
    /// Returns `false` when the shortcode was rejected.
    pub fn insert(&mut self, shortcode: impl Into<String>, glyph: impl Into<String>) -> bool {
        let shortcode = shortcode.into();
        if shortcode.is_empty() {
            return false;
        }
        self.entries.insert(shortcode, glyph.into());
        true
    }

    /// Glyph for `shortcode`, if known.
    #[must_use]
    pub fn glyph(&self, shortcode: &str) -> Option<&str> {
        self.entries.get(shortcode).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, shortcode: &str) -> bool {
        self.entries.contains_key(shortcode)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shortcode keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(shortcode, glyph)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Collects `(shortcode, glyph)` pairs.
impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = Self::new();
        for (shortcode, glyph) in iter {
            dict.insert(shortcode, glyph);
        }
        dict
    }
}

/// Replace every recognized `:shortcode:` span in `text` with its glyph.
///
/// Returns the input unchanged (borrowed) when it contains no colon.
#[must_use]
pub fn expand<'a>(text: &'a str, dict: &Dictionary) -> Cow<'a, str> {
    if !text.contains(':') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find(':') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find(':') else {
            // Unterminated span: keep it verbatim.
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let code = &after[..close];
        match dict.glyph(code) {
            Some(glyph) => {
                out.push_str(glyph);
                rest = &after[close + 1..];
            }
            None => {
                out.push(':');
                out.push_str(code);
                rest = &after[close..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
