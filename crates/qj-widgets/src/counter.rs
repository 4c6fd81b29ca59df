#![forbid(unsafe_code)]

//! Remaining-characters counter, `[N]`, drawn over the bottom border.

use qj_core::geometry::Rect;

use crate::Widget;
use crate::buffer::{Buffer, CellAttrs};

/// Counter widget. A raised overflow flag renders in blinking reverse video,
/// whatever the count; an unflagged negative count is reversed only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharCounter {
    remaining: isize,
    overflow: bool,
}

impl CharCounter {
    #[must_use]
    pub const fn new(remaining: isize) -> Self {
        Self {
            remaining,
            overflow: false,
        }
    }

    #[must_use]
    pub const fn overflow(mut self, flagged: bool) -> Self {
        self.overflow = flagged;
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        format!("[{}]", self.remaining)
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        u16::try_from(self.text().chars().count()).unwrap_or(u16::MAX)
    }

    /// Column of the opening bracket when right-aligned in a `width`-wide
    /// panel (one column left of the corner).
    #[must_use]
    pub fn anchor_x(&self, width: u16) -> u16 {
        width.saturating_sub(self.width() + 1)
    }

    #[must_use]
    pub fn attrs(&self) -> CellAttrs {
        match (self.remaining < 0, self.overflow) {
            (_, true) => CellAttrs::REVERSE | CellAttrs::BLINK,
            (true, false) => CellAttrs::REVERSE,
            (false, false) => CellAttrs::empty(),
        }
    }
}

impl Widget for CharCounter {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_string(area.x, area.y, &self.text(), self.attrs(), area.right());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_is_plain() {
        let c = CharCounter::new(140);
        assert_eq!(c.text(), "[140]");
        assert_eq!(c.attrs(), CellAttrs::empty());
        assert_eq!(c.anchor_x(80), 74);
    }

    #[test]
    fn flag_blinks_at_exhausted_budget() {
        assert_eq!(CharCounter::new(0).attrs(), CellAttrs::empty());
        assert_eq!(
            CharCounter::new(0).overflow(true).attrs(),
            CellAttrs::REVERSE | CellAttrs::BLINK
        );
    }

    #[test]
    fn negative_reverses_and_blinks_when_flagged() {
        let c = CharCounter::new(-3);
        assert_eq!(c.text(), "[-3]");
        assert_eq!(c.attrs(), CellAttrs::REVERSE);
        assert_eq!(c.overflow(true).attrs(), CellAttrs::REVERSE | CellAttrs::BLINK);
    }

    #[test]
    fn renders_with_attrs() {
        let mut buf = Buffer::new(6, 1);
        CharCounter::new(-1)
            .overflow(true)
            .render(Rect::new(1, 0, 5, 1), &mut buf);
        assert_eq!(buf.row_text(0), " [-1] ");
        assert_eq!(
            buf.get(2, 0).map(|c| c.attrs),
            Some(CellAttrs::REVERSE | CellAttrs::BLINK)
        );
    }
}
