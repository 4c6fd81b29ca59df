#![forbid(unsafe_code)]

//! Single-line bordered box with an optional title over the top edge.
//!
//! Both the journal panel and the suggestion overlay are drawn inside one.

use crate::Widget;
use crate::buffer::{Buffer, Cell, CellAttrs};
use qj_core::geometry::Rect;

/// Box-drawing characters for a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    /// Single-line box drawing (│, ─).
    pub const PLAIN: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };
}

/// A bordered box. The title starts one column in from the corner and is
/// clipped before the opposite corner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block<'a> {
    title: Option<&'a str>,
    title_attrs: CellAttrs,
}

impl<'a> Block<'a> {
    #[must_use]
    pub fn bordered() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn title_attrs(mut self, attrs: CellAttrs) -> Self {
        self.title_attrs = attrs;
        self
    }

    /// The area left inside the border.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        )
    }

    fn render_border(area: Rect, buf: &mut Buffer) {
        let set = BorderSet::PLAIN;
        let (right, bottom) = (area.right() - 1, area.bottom() - 1);

        for x in area.x..area.right() {
            buf.set(x, area.y, Cell::from_char(set.horizontal));
            buf.set(x, bottom, Cell::from_char(set.horizontal));
        }
        for y in area.y..area.bottom() {
            buf.set(area.x, y, Cell::from_char(set.vertical));
            buf.set(right, y, Cell::from_char(set.vertical));
        }
        buf.set(area.x, area.y, Cell::from_char(set.top_left));
        buf.set(right, area.y, Cell::from_char(set.top_right));
        buf.set(area.x, bottom, Cell::from_char(set.bottom_left));
        buf.set(right, bottom, Cell::from_char(set.bottom_right));
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let Some(title) = self.title else {
            return;
        };
        if area.width < 3 {
            return;
        }
        let max_x = area.right().saturating_sub(1);
        buf.set_string(area.x + 1, area.y, title, self.title_attrs, max_x);
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Self::render_border(area, buf);
        self.render_title(area, buf);
    }
}
