#![forbid(unsafe_code)]

//! Shortcode suggestion overlay.
//!
//! A bordered box listing `glyph :shortcode:` rows, anchored just below the
//! text at the column where the open shortcode is being typed. Anchors near
//! the right or bottom edge slide back into the viewport.

use qj_core::geometry::Rect;
use qj_text::{Suggestion, column_width};

use crate::Widget;
use crate::block::Block;
use crate::buffer::{Buffer, CellAttrs};

/// Overlay over ranked suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPopover<'a> {
    entries: Vec<Suggestion<'a>>,
}

impl<'a> SuggestionPopover<'a> {
    #[must_use]
    pub fn new(entries: Vec<Suggestion<'a>>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn longest_code(&self) -> usize {
        self.entries
            .iter()
            .map(|s| column_width(s.shortcode))
            .max()
            .unwrap_or(0)
    }

    /// Box size: two border columns, a two-column glyph, space, two colons,
    /// and the longest shortcode.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        let width = self.longest_code() + 7;
        let height = self.entries.len() + 2;
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }

    /// Box placement for the current line's length and layout height,
    /// clamped into `viewport`.
    #[must_use]
    pub fn placement(&self, line_len: usize, layout_lines: usize, viewport: Rect) -> Rect {
        let (width, height) = self.size();
        let x = u16::try_from(line_len.saturating_sub(1)).unwrap_or(u16::MAX);
        let y = u16::try_from(layout_lines + 2).unwrap_or(u16::MAX);
        Rect::new(x, y, width, height).clamp_within(&viewport)
    }

    /// Row text, padded to the longest entry.
    fn row(&self, s: &Suggestion<'_>) -> String {
        let text = format!("{} :{}:", s.glyph, s.shortcode);
        let pad = self.longest_code() + 4;
        format!("{text:<pad$}")
    }
}

impl Widget for SuggestionPopover<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.entries.is_empty() {
            return;
        }
        Block::bordered().render(area, buf);
        let inner = Block::bordered().inner(area);
        for (i, entry) in self.entries.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_string(inner.x, y, &self.row(entry), CellAttrs::empty(), inner.right());
        }
    }
}
