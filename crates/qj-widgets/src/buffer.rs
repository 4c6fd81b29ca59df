#![forbid(unsafe_code)]

//! Cell grid that widgets draw into.
//!
//! A [`Buffer`] is a row-major grid of [`Cell`]s. Each cell holds one `char`
//! plus display attributes. Writes outside the grid are dropped silently so
//! widgets never have to bounds-check.
//!
//! Text is laid out one column per `char`, but terminals draw most emoji two
//! columns wide. [`Buffer::set_string`] therefore follows a wide glyph with a
//! [`Cell::CONTINUATION`] cell, which the presenter never emits.

use bitflags::bitflags;
use qj_core::geometry::Rect;
use unicode_width::UnicodeWidthChar;

bitflags! {
    /// Display attributes of a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellAttrs: u8 {
        const BOLD    = 0b001;
        const REVERSE = 0b010;
        const BLINK   = 0b100;
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attrs: CellAttrs,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attrs: CellAttrs::empty(),
        }
    }
}

impl Cell {
    /// Second column of a wide glyph. Holds no content of its own.
    pub const CONTINUATION: Self = Self {
        ch: '\0',
        attrs: CellAttrs::empty(),
    };

    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            attrs: CellAttrs::empty(),
        }
    }

    #[must_use]
    pub const fn with_attrs(mut self, attrs: CellAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.ch == '\0'
    }

    /// Terminal columns the cell occupies: 0 for a continuation, otherwise
    /// 1 or 2.
    #[must_use]
    pub fn width(&self) -> u16 {
        if self.is_continuation() {
            return 0;
        }
        match self.ch.width() {
            Some(2..) => 2,
            _ => 1,
        }
    }
}

/// Row-major cell grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle at the origin.
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Write one cell; out-of-bounds writes are ignored.
    ///
    /// Overwriting either half of a wide glyph blanks the other half.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(old) = self.get(x, y).copied() else {
            return;
        };
        if old.is_continuation() {
            if let Some(head) = x.checked_sub(1) {
                self.put(head, y, Cell::default());
            }
        } else {
            self.blank_orphaned_continuation(old, x, y);
        }
        self.put(x, y, cell);
    }

    fn set_continuation(&mut self, x: u16, y: u16) {
        let Some(old) = self.get(x, y).copied() else {
            return;
        };
        self.blank_orphaned_continuation(old, x, y);
        self.put(x, y, Cell::CONTINUATION);
    }

    fn blank_orphaned_continuation(&mut self, old: Cell, x: u16, y: u16) {
        let next = x.saturating_add(1);
        if old.width() == 2 && self.get(next, y).is_some_and(Cell::is_continuation) {
            self.put(next, y, Cell::default());
        }
    }

    fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Write `text` left to right starting at `(x, y)`, stopping before
    /// `max_x` (exclusive) or the buffer edge. A wide glyph that would not
    /// fit whole ends the write.
    ///
    /// Returns the column after the last written cell.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, attrs: CellAttrs, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut col = x;
        for ch in text.chars() {
            let cell = Cell::from_char(ch).with_attrs(attrs);
            let end = col.saturating_add(cell.width());
            if end > limit {
                break;
            }
            self.set(col, y, cell);
            if cell.width() == 2 {
                self.set_continuation(col + 1, y);
            }
            col = end;
        }
        col
    }

    /// Row `y` as plain text (attributes and continuation cells dropped).
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }
}
