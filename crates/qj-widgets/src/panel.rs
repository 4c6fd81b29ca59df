#![forbid(unsafe_code)]

//! The journal panel: a bordered box holding the entry text.
//!
//! # Layout
//!
//! ```text
//! ┌[QuickJournal]──────────[ ·  ·  😐  ·  ·  ]─┐   row 0
//! │                                           │
//! │ text goes here▎                           │   rows 1+padding ..
//! │                                           │
//! └──────────────────────────────────────[131]┘   bottom row
//! ```
//!
//! The box grows with the wrapped text: its bottom row is
//! `char_limit / (width - 2*padding - 2) + 2*padding + lines`, which leaves
//! room for roughly a full budget of text below the current lines.

use qj_core::geometry::Rect;
use qj_text::Mood;
use qj_text::editor::text_width_for;

use crate::Widget;
use crate::block::Block;
use crate::buffer::{Buffer, CellAttrs};
use crate::counter::CharCounter;
use crate::entry_view::EntryView;
use crate::mood_bar::MoodBar;

/// Panel dimensions derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub width: u16,
    pub padding: u16,
    pub char_limit: usize,
}

impl PanelGeometry {
    #[must_use]
    pub const fn new(width: u16, padding: u16, char_limit: usize) -> Self {
        Self {
            width,
            padding,
            char_limit,
        }
    }

    /// Wrap width for the entry text.
    #[must_use]
    pub const fn text_width(&self) -> usize {
        text_width_for(self.width as usize, self.padding as usize)
    }

    /// Top-left cell of the entry text.
    #[must_use]
    pub const fn text_origin(&self) -> (u16, u16) {
        (1 + self.padding, 1 + self.padding)
    }

    /// Row of the bottom border for a layout of `lines` display lines.
    #[must_use]
    pub fn bottom_row(&self, lines: usize) -> u16 {
        let inner = usize::from(self.width)
            .saturating_sub(2 * usize::from(self.padding) + 2)
            .max(1);
        let row = self.char_limit / inner + 2 * usize::from(self.padding) + lines;
        u16::try_from(row).unwrap_or(u16::MAX)
    }

    /// The panel box for `lines` display lines.
    #[must_use]
    pub fn area(&self, lines: usize) -> Rect {
        Rect::new(0, 0, self.width, self.bottom_row(lines).saturating_add(1))
    }
}

/// Full panel: border, title, mood bar, entry text, and counter.
#[derive(Debug, Clone)]
pub struct JournalPanel<'a> {
    geometry: PanelGeometry,
    title: &'a str,
    lines: &'a [String],
    mood: Mood,
    counter: CharCounter,
}

impl<'a> JournalPanel<'a> {
    #[must_use]
    pub fn new(geometry: PanelGeometry, lines: &'a [String]) -> Self {
        Self {
            geometry,
            title: "",
            lines,
            mood: Mood::default(),
            counter: CharCounter::new(geometry.char_limit as isize),
        }
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    #[must_use]
    pub fn counter(mut self, counter: CharCounter) -> Self {
        self.counter = counter;
        self
    }
}

impl Widget for JournalPanel<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let geo = self.geometry;
        let panel = self.geometry.area(self.lines.len()).intersection(&area);
        if panel.is_empty() {
            return;
        }

        let title = format!("[{}]", self.title);
        Block::bordered()
            .title(&title)
            .title_attrs(CellAttrs::BOLD)
            .render(panel, buf);

        MoodBar::new(self.mood).render(
            Rect::new(MoodBar::anchor_x(geo.width), 0, MoodBar::WIDTH, 1),
            buf,
        );

        // Text may run into the right padding: wide glyphs take an extra
        // column that the wrap width does not count.
        let (tx, ty) = geo.text_origin();
        let text_area = Rect::new(
            tx,
            ty,
            geo.width.saturating_sub(tx + 1),
            panel.bottom().saturating_sub(ty + 1),
        );
        EntryView::new(self.lines).render(text_area, buf);

        let bottom = geo.bottom_row(self.lines.len());
        self.counter.render(
            Rect::new(self.counter.anchor_x(geo.width), bottom, self.counter.width(), 1),
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_at_80_columns() {
        let geo = PanelGeometry::new(80, 1, 140);
        assert_eq!(geo.text_width(), 75);
        assert_eq!(geo.text_origin(), (2, 2));
        // 140 / 76 = 1, + 2 padding + 1 line
        assert_eq!(geo.bottom_row(1), 4);
        assert_eq!(geo.area(1), Rect::new(0, 0, 80, 5));
    }

    #[test]
    fn narrow_panel_does_not_divide_by_zero() {
        let geo = PanelGeometry::new(3, 1, 140);
        assert_eq!(geo.text_width(), 0);
        assert_eq!(geo.bottom_row(1), 143);
    }
}
