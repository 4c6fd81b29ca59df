#![forbid(unsafe_code)]

//! The mood selector strip drawn over the panel's top border.
//!
//! ```text
//! [ ·  ·  😐 ·  ·  ]
//! ```
//!
//! The bracket is bold; only the selected mood shows its glyph, the others
//! show a dot. Slots are three columns apart, so a two-column glyph still
//! leaves a gap before the next slot.

use qj_core::geometry::Rect;
use qj_text::Mood;

use crate::Widget;
use crate::buffer::{Buffer, Cell, CellAttrs};

const UNSELECTED: char = '·';

/// Widget for the current [`Mood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodBar {
    mood: Mood,
}

impl MoodBar {
    /// Columns occupied by the bar.
    pub const WIDTH: u16 = 18;

    #[must_use]
    pub const fn new(mood: Mood) -> Self {
        Self { mood }
    }

    /// Column of the left bracket when right-aligned in a `width`-wide panel.
    #[must_use]
    pub const fn anchor_x(width: u16) -> u16 {
        width.saturating_sub(Self::WIDTH + 1)
    }

    /// Offset of mood slot `index` from the left bracket.
    #[must_use]
    pub const fn slot_offset(index: usize) -> u16 {
        3 * index as u16 + 2
    }
}

impl Widget for MoodBar {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let max_x = area.right();
        buf.set_string(area.x, area.y, "[ ", CellAttrs::BOLD, max_x);
        buf.set_string(
            area.x + Self::WIDTH - 1,
            area.y,
            "]",
            CellAttrs::BOLD,
            max_x,
        );
        for x in area.x + 2..area.x + Self::WIDTH - 1 {
            if x < max_x {
                buf.set(x, area.y, Cell::from_char(' ').with_attrs(CellAttrs::BOLD));
            }
        }

        for mood in Mood::ALL {
            let x = area.x + Self::slot_offset(mood.index());
            if x >= max_x {
                continue;
            }
            if mood == self.mood {
                buf.set_string(x, area.y, mood.glyph(), CellAttrs::empty(), max_x);
            } else {
                buf.set(x, area.y, Cell::from_char(UNSELECTED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(mood: Mood) -> String {
        let mut buf = Buffer::new(MoodBar::WIDTH, 1);
        MoodBar::new(mood).render(buf.area(), &mut buf);
        buf.row_text(0)
    }

    #[test]
    fn neutral_layout() {
        assert_eq!(draw(Mood::Neutral), "[ ·  ·  😐 ·  ·  ]");
    }

    #[test]
    fn extremes() {
        assert_eq!(draw(Mood::Awful), "[ 😣 ·  ·  ·  ·  ]");
        assert_eq!(draw(Mood::Great), "[ ·  ·  ·  ·  😁 ]");
    }

    #[test]
    fn right_aligned_anchor() {
        assert_eq!(MoodBar::anchor_x(80), 61);
        assert_eq!(MoodBar::anchor_x(10), 0);
    }

    #[test]
    fn clipped_when_narrow() {
        let mut buf = Buffer::new(5, 1);
        MoodBar::new(Mood::Neutral).render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "[ ·  ");
    }
}
