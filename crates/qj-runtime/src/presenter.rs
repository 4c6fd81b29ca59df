#![forbid(unsafe_code)]

//! Presenter: turns buffer diffs into terminal output.
//!
//! Tracks the terminal cursor and the active attributes so that a run of
//! changed cells costs one cursor move and attribute changes are emitted
//! only at transitions. Output is buffered and flushed once per frame.
//!
//! # Wide glyphs
//!
//! A wide glyph advances the terminal cursor two columns. The buffer marks
//! its second column with [`Cell::CONTINUATION`], which is never emitted.

use std::io::{self, BufWriter, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use tracing::trace;

use qj_widgets::{Buffer, BufferDiff, Cell, CellAttrs};

const BUFFER_CAPACITY: usize = 16 * 1024;

/// State-tracked ANSI emitter over any writer.
#[derive(Debug)]
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    attrs: Option<CellAttrs>,
    cursor: Option<(u16, u16)>,
}

impl<W: Write> Presenter<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            attrs: None,
            cursor: None,
        }
    }

    /// Emit the cells named by `diff` from `buffer`, then flush.
    ///
    /// # Errors
    ///
    /// Propagates write errors from the underlying writer.
    pub fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
        let runs = diff.runs();
        trace!(changes = diff.len(), runs = runs.len(), "presenting frame");

        for run in &runs {
            for x in run.x0..=run.x1 {
                let Some(cell) = buffer.get(x, run.y) else {
                    continue;
                };
                self.emit_cell(x, run.y, cell)?;
            }
        }

        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        self.attrs = None;
        self.writer.flush()
    }

    fn emit_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        // The glyph before it already covered this column.
        if cell.is_continuation() {
            return Ok(());
        }
        self.move_cursor_to(x, y)?;
        self.emit_attrs(cell.attrs)?;
        queue!(self.writer, Print(cell.ch))?;
        self.cursor = Some((x.saturating_add(cell.width()), y));
        Ok(())
    }

    fn emit_attrs(&mut self, attrs: CellAttrs) -> io::Result<()> {
        if self.attrs == Some(attrs) {
            return Ok(());
        }
        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        if attrs.contains(CellAttrs::BOLD) {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if attrs.contains(CellAttrs::REVERSE) {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        if attrs.contains(CellAttrs::BLINK) {
            queue!(self.writer, SetAttribute(Attribute::SlowBlink))?;
        }
        self.attrs = Some(attrs);
        Ok(())
    }

    fn move_cursor_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor == Some((x, y)) {
            return Ok(());
        }
        queue!(self.writer, MoveTo(x, y))?;
        self.cursor = Some((x, y));
        Ok(())
    }

    /// Erase the whole screen and home the cursor.
    ///
    /// # Errors
    ///
    /// Propagates write errors.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        queue!(
            self.writer,
            SetAttribute(Attribute::Reset),
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        self.attrs = None;
        self.cursor = Some((0, 0));
        self.writer.flush()
    }

    /// Flush buffered output and return the writer.
    ///
    /// # Errors
    ///
    /// Returns the flush error.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(presenter: Presenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner().unwrap()).unwrap()
    }

    fn present(prev: &Buffer, next: &Buffer) -> String {
        let mut presenter = Presenter::new(Vec::new());
        presenter
            .present(next, &BufferDiff::compute(prev, next))
            .unwrap();
        output(presenter)
    }

    #[test]
    fn empty_diff_only_resets() {
        let buffer = Buffer::new(10, 3);
        assert_eq!(present(&buffer, &buffer), "\u{1b}[0m");
    }

    #[test]
    fn single_cell_change() {
        let prev = Buffer::new(10, 10);
        let mut next = prev.clone();
        next.set(5, 5, Cell::from_char('X'));
        let out = present(&prev, &next);
        assert!(out.starts_with("\u{1b}[6;6H"), "{out:?}");
        assert!(out.contains('X'));
        assert!(out.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn run_needs_one_move() {
        let prev = Buffer::new(20, 2);
        let mut next = prev.clone();
        next.set_string(2, 1, "hello", CellAttrs::empty(), 20);
        let out = present(&prev, &next);
        assert_eq!(out.matches('H').count(), 1);
        assert!(out.contains("hello"));
    }

    #[test]
    fn attrs_emitted_at_transitions_only() {
        let prev = Buffer::new(20, 1);
        let mut next = prev.clone();
        next.set_string(0, 0, "ab", CellAttrs::BOLD, 20);
        next.set_string(2, 0, "cd", CellAttrs::REVERSE | CellAttrs::BLINK, 20);
        let out = present(&prev, &next);
        assert_eq!(out.matches("\u{1b}[1m").count(), 1);
        assert_eq!(out.matches("\u{1b}[7m").count(), 1);
        assert_eq!(out.matches("\u{1b}[5m").count(), 1);
        assert!(out.contains("\u{1b}[1mab"));
        assert!(out.contains("\u{1b}[7m\u{1b}[5mcd"));
    }

    #[test]
    fn continuation_cell_is_not_emitted() {
        let prev = Buffer::new(10, 1);
        let mut next = prev.clone();
        next.set_string(0, 0, "a🙂b", CellAttrs::empty(), 10);
        let out = present(&prev, &next);
        assert_eq!(out, "\u{1b}[1;1H\u{1b}[0ma🙂b\u{1b}[0m");
    }

    #[test]
    fn text_after_wide_glyph_keeps_both_visible() {
        let prev = Buffer::new(10, 1);
        let mut before = prev.clone();
        before.set_string(0, 0, "a:sm", CellAttrs::empty(), 10);
        let mut after = prev.clone();
        after.set_string(0, 0, "a🙂b", CellAttrs::empty(), 10);
        // Columns 1..=3 change; 'b' lands at column 3, right after the glyph.
        let out = present(&before, &after);
        assert_eq!(out, "\u{1b}[1;2H\u{1b}[0m🙂b\u{1b}[0m");
    }

    #[test]
    fn clear_screen_homes_cursor() {
        let mut presenter = Presenter::new(Vec::new());
        presenter.clear_screen().unwrap();
        let mut next = Buffer::new(4, 1);
        next.set(0, 0, Cell::from_char('z'));
        presenter
            .present(&next, &BufferDiff::compute(&Buffer::new(4, 1), &next))
            .unwrap();
        let out = output(presenter);
        assert!(out.contains("\u{1b}[2J"));
        // Already at (0, 0): no second move.
        assert_eq!(out.matches("\u{1b}[1;1H").count(), 1);
    }
}
