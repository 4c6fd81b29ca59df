#![forbid(unsafe_code)]

//! Cell-level diff between two frames.
//!
//! The presenter only rewrites cells that changed since the last frame.
//! Changes are grouped into [`ChangeRun`]s (horizontal spans on one row) so a
//! single cursor move covers each span.

use crate::buffer::Buffer;

/// A horizontal run of changed cells on row `y`, `x0..=x1` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeRun {
    pub y: u16,
    pub x0: u16,
    pub x1: u16,
}

/// Changed cell coordinates in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferDiff {
    changes: Vec<(u16, u16)>,
}

impl BufferDiff {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cell of `next`, for the first frame or after a resize.
    #[must_use]
    pub fn full(next: &Buffer) -> Self {
        let changes = (0..next.height())
            .flat_map(|y| (0..next.width()).map(move |x| (x, y)))
            .collect();
        Self { changes }
    }

    /// Cells that differ between `prev` and `next`.
    ///
    /// Falls back to [`BufferDiff::full`] when the dimensions differ.
    #[must_use]
    pub fn compute(prev: &Buffer, next: &Buffer) -> Self {
        if prev.width() != next.width() || prev.height() != next.height() {
            return Self::full(next);
        }
        let mut changes = Vec::new();
        for y in 0..next.height() {
            for x in 0..next.width() {
                if prev.get(x, y) != next.get(x, y) {
                    changes.push((x, y));
                }
            }
        }
        Self { changes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Group adjacent changes on the same row.
    #[must_use]
    pub fn runs(&self) -> Vec<ChangeRun> {
        let mut runs: Vec<ChangeRun> = Vec::new();
        for &(x, y) in &self.changes {
            match runs.last_mut() {
                Some(run) if run.y == y && run.x1 + 1 == x => run.x1 = x,
                _ => runs.push(ChangeRun { y, x0: x, x1: x }),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cell;

    #[test]
    fn identical_buffers_have_no_changes() {
        let a = Buffer::new(4, 2);
        assert!(BufferDiff::compute(&a, &a.clone()).is_empty());
    }

    #[test]
    fn adjacent_changes_merge_into_runs() {
        let prev = Buffer::new(6, 2);
        let mut next = prev.clone();
        next.set(1, 0, Cell::from_char('a'));
        next.set(2, 0, Cell::from_char('b'));
        next.set(4, 0, Cell::from_char('c'));
        next.set(0, 1, Cell::from_char('d'));
        let diff = BufferDiff::compute(&prev, &next);
        assert_eq!(diff.len(), 4);
        assert_eq!(
            diff.runs(),
            vec![
                ChangeRun { y: 0, x0: 1, x1: 2 },
                ChangeRun { y: 0, x0: 4, x1: 4 },
                ChangeRun { y: 1, x0: 0, x1: 0 },
            ]
        );
    }

    #[test]
    fn resize_forces_full_redraw() {
        let prev = Buffer::new(2, 2);
        let next = Buffer::new(3, 2);
        let diff = BufferDiff::compute(&prev, &next);
        assert_eq!(diff.len(), 6);
        assert_eq!(diff.runs().len(), 2);
    }
}
