#![forbid(unsafe_code)]

//! Render-ready layout of the entry buffer.
//!
//! [`WrappedLayout`] is rebuilt from scratch on every mutation: split on
//! explicit newlines, optionally expand shortcodes per logical line, wrap each
//! line, then append the cursor glyph to the final display line.

use crate::column_width;
use crate::shortcode::{Dictionary, expand};
use crate::wrap::{Separators, wrap_line_with};

/// Reserved glyph drawn at the end of the text as the cursor.
pub const CURSOR_GLYPH: char = '\u{258e}';

/// Cursor cell in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    /// Display line (0-based).
    pub row: usize,
    /// Column of the cursor glyph within that line (0-based).
    pub col: usize,
}

impl CursorPosition {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Ordered display lines plus the cursor placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLayout {
    lines: Vec<String>,
    cursor: CursorPosition,
}

impl WrappedLayout {
    /// Lay out `text` at `width` columns.
    ///
    /// When `preview` is given, shortcodes are expanded before wrapping.
    #[must_use]
    pub fn build(
        text: &str,
        width: usize,
        separators: &Separators,
        preview: Option<&Dictionary>,
    ) -> Self {
        let mut lines = Vec::new();
        for logical in text.split('\n') {
            if logical.is_empty() {
                lines.push(String::new());
                continue;
            }
            match preview {
                Some(dict) => lines.extend(wrap_line_with(&expand(logical, dict), width, separators)),
                None => lines.extend(wrap_line_with(logical, width, separators)),
            }
        }

        // `split` always yields at least one piece, so `lines` is non-empty.
        let row = lines.len() - 1;
        let last = &mut lines[row];
        let col = column_width(last);
        last.push(CURSOR_GLYPH);

        Self {
            lines,
            cursor: CursorPosition::new(row, col),
        }
    }

    /// Display lines, the last one ending in [`CURSOR_GLYPH`].
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of display lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub const fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Widest display line, cursor included.
    #[must_use]
    pub fn max_line_width(&self) -> usize {
        self.lines.iter().map(|l| column_width(l)).max().unwrap_or(0)
    }

    /// Apply a per-line display filter, keeping the cursor placement.
    ///
    /// Filters must preserve the column count of each line.
    #[must_use]
    pub fn map_lines(self, mut filter: impl FnMut(&str) -> String) -> Self {
        let lines = self.lines.iter().map(|l| filter(l)).collect();
        Self {
            lines,
            cursor: self.cursor,
        }
    }
}
