#![forbid(unsafe_code)]

//! The wrapped entry text inside the panel.

use qj_core::geometry::Rect;

use crate::Widget;
use crate::buffer::{Buffer, CellAttrs};

/// Draws wrapped display lines top to bottom, clipped to the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView<'a> {
    lines: &'a [String],
}

impl<'a> EntryView<'a> {
    #[must_use]
    pub const fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }
}

impl Widget for EntryView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self.lines.iter().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            let y = area.y.saturating_add(offset);
            if y >= area.bottom() {
                break;
            }
            buf.set_string(area.x, y, line, CellAttrs::empty(), area.right());
        }
    }
}
