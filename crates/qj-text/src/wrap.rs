#![forbid(unsafe_code)]

//! Greedy word wrapping over a fixed column width.
//!
//! A logical line is split into display segments by break offsets. Only the
//! first `max_width` columns of the remaining text are examined per step: the
//! break goes at the end of the last whole word that fits (the separator is
//! consumed), or, if the window holds no word boundary, at the last column of
//! the window (a hard mid-word break, no hyphenation).
//!
//! # Example
//! ```
//! use qj_text::wrap::{break_positions, wrap_line};
//!
//! assert_eq!(wrap_line("the quick brown fox", 10), vec!["the quick", "brown fox"]);
//! assert_eq!(break_positions("supercalifragilistic", 5), vec![4, 9, 14]);
//! ```
//!
//! # Invariants
//!
//! - Offsets are absolute char offsets into the line and strictly increasing.
//! - Each offset lies in `[0, len)`; no offsets when `len <= max_width`.
//! - Rejoining the segments, re-inserting the separator consumed at each soft
//!   break, reproduces the input exactly.
//! - Every segment fits in `max_width` columns.

use smallvec::SmallVec;

/// Separator set used when none is configured.
pub const DEFAULT_SEPARATORS: &[char] = &[' '];

/// Characters a line may break on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators(SmallVec<[char; 4]>);

impl Separators {
    /// Build a separator set from the given characters.
    ///
    /// An empty set is allowed; every break is then a hard break.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set: SmallVec<[char; 4]> = chars.into_iter().collect();
        set.sort_unstable();
        set.dedup();
        Self(set)
    }

    /// Whether `c` is a break separator.
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Iterate the separator characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS.iter().copied())
    }
}

/// How a segment ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// Break at a separator; the separator at the offset is consumed.
    Soft,
    /// Forced mid-word break; the char at the offset ends the segment.
    Hard,
}

/// A single break in a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    /// Char offset into the input line.
    pub offset: usize,
    /// Whether the offset consumes a separator.
    pub kind: BreakKind,
}

impl LineBreak {
    #[must_use]
    pub const fn soft(offset: usize) -> Self {
        Self {
            offset,
            kind: BreakKind::Soft,
        }
    }

    #[must_use]
    pub const fn hard(offset: usize) -> Self {
        Self {
            offset,
            kind: BreakKind::Hard,
        }
    }

    /// Exclusive end of the segment this break closes.
    #[inline]
    #[must_use]
    pub const fn segment_end(&self) -> usize {
        match self.kind {
            BreakKind::Soft => self.offset,
            BreakKind::Hard => self.offset + 1,
        }
    }
}

/// Compute the break offsets for `line` using the default separators.
#[must_use]
pub fn break_offsets(line: &str, max_width: usize) -> Vec<LineBreak> {
    break_offsets_with(line, max_width, &Separators::default())
}

/// Compute the break offsets for `line` with an explicit separator set.
///
/// A `max_width` of zero disables wrapping.
#[must_use]
pub fn break_offsets_with(line: &str, max_width: usize, separators: &Separators) -> Vec<LineBreak> {
    let chars: Vec<char> = line.chars().collect();
    let mut breaks = Vec::new();
    if max_width == 0 {
        return breaks;
    }

    // Each step advances past the break, so the remainder strictly shrinks.
    let mut start = 0;
    while chars.len() - start > max_width {
        let window = &chars[start..start + max_width];
        let brk = match last_word_end(window, separators) {
            Some(i) => LineBreak::soft(start + i),
            None => LineBreak::hard(start + max_width - 1),
        };
        breaks.push(brk);
        start = brk.offset + 1;
    }
    breaks
}

/// Offsets only, for callers that do not care about the break kind.
#[must_use]
pub fn break_positions(line: &str, max_width: usize) -> Vec<usize> {
    break_offsets(line, max_width)
        .into_iter()
        .map(|b| b.offset)
        .collect()
}

/// Last index `i >= 1` in the window where `window[i]` is a separator and
/// `window[i - 1]` is not.
fn last_word_end(window: &[char], separators: &Separators) -> Option<usize> {
    (1..window.len())
        .rev()
        .find(|&i| separators.contains(window[i]) && !separators.contains(window[i - 1]))
}

/// Cut `line` into display segments at the given breaks.
#[must_use]
pub fn split_at_breaks(line: &str, breaks: &[LineBreak]) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for brk in breaks {
        segments.push(chars[start..brk.segment_end()].iter().collect());
        start = brk.offset + 1;
    }
    segments.push(chars[start.min(chars.len())..].iter().collect());
    segments
}

/// Wrap a single logical line (no embedded newlines).
#[must_use]
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    wrap_line_with(line, max_width, &Separators::default())
}

/// Wrap a single logical line with an explicit separator set.
#[must_use]
pub fn wrap_line_with(line: &str, max_width: usize, separators: &Separators) -> Vec<String> {
    let breaks = break_offsets_with(line, max_width, separators);
    split_at_breaks(line, &breaks)
}

/// Wrap a whole buffer: split on `\n`, then wrap each logical line.
///
/// An empty logical line maps to a single empty display line.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    wrap_text_with(text, max_width, &Separators::default())
}

/// [`wrap_text`] with an explicit separator set.
#[must_use]
pub fn wrap_text_with(text: &str, max_width: usize, separators: &Separators) -> Vec<String> {
    let mut lines = Vec::new();
    for logical in text.split('\n') {
        if logical.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(wrap_line_with(logical, max_width, separators));
    }
    lines
}

/// Rebuild the input line from its segments and breaks.
///
/// Inverse of [`split_at_breaks`] given the consumed separators.
#[must_use]
pub fn reassemble(line: &str, breaks: &[LineBreak]) -> String {
    let chars: Vec<char> = line.chars().collect();
    let segments = split_at_breaks(line, breaks);
    let mut out = String::with_capacity(line.len());
    for (i, segment) in segments.iter().enumerate() {
        out.push_str(segment);
        if let Some(brk) = breaks.get(i)
            && brk.kind == BreakKind::Soft
        {
            out.push(chars[brk.offset]);
        }
    }
    out
}
