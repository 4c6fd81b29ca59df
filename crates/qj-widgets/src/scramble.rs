#![forbid(unsafe_code)]

//! Privacy display filter.
//!
//! In private mode every displayed character is replaced with a random
//! alphanumeric, except the cursor glyph and a small set of spacing and
//! punctuation characters so word shapes stay readable to the writer. The
//! filter runs on the wrapped layout, never on the buffer, so column counts
//! and the committed text are unaffected.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use qj_text::{CURSOR_GLYPH, WrappedLayout};

const REPLACEMENTS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PRESERVED: &[char] = &[' ', ',', '.', '!', '?', '-', '\'', '"'];

/// Whether `c` is shown as-is in private mode.
#[must_use]
pub fn is_preserved(c: char) -> bool {
    c == CURSOR_GLYPH || PRESERVED.contains(&c)
}

/// Random character substitution for private mode.
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: SmallRng,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler {
    /// Seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic output, for tests and snapshots.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn scramble_line(&mut self, line: &str) -> String {
        line.chars()
            .map(|c| {
                if is_preserved(c) {
                    c
                } else {
                    char::from(REPLACEMENTS[self.rng.random_range(0..REPLACEMENTS.len())])
                }
            })
            .collect()
    }

    /// Apply the filter to every display line.
    #[must_use]
    pub fn scramble_layout(&mut self, layout: WrappedLayout) -> WrappedLayout {
        layout.map_lines(|line| self.scramble_line(line))
    }
}
