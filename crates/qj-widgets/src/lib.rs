#![forbid(unsafe_code)]

//! Widgets and the cell buffer they draw into.
//!
//! # Role in QuickJournal
//! `qj-widgets` turns editor state into cells. Every widget implements
//! [`Widget`] and draws into a [`Buffer`]; nothing here writes to the
//! terminal. The runtime diffs successive buffers ([`BufferDiff`]) and hands
//! the changes to its presenter.
//!
//! | Widget | Draws |
//! |--------|-------|
//! | [`Block`] | Border box with a title over the top edge |
//! | [`JournalPanel`] | The whole entry panel |
//! | [`MoodBar`] | Mood selector over the top border |
//! | [`CharCounter`] | `[N]` budget counter over the bottom border |
//! | [`EntryView`] | Wrapped entry text |
//! | [`SuggestionPopover`] | Shortcode suggestions below the text |

pub mod block;
pub mod buffer;
pub mod counter;
pub mod diff;
pub mod entry_view;
pub mod mood_bar;
pub mod panel;
pub mod popover;
pub mod scramble;

use qj_core::geometry::Rect;

pub use block::{Block, BorderSet};
pub use buffer::{Buffer, Cell, CellAttrs};
pub use counter::CharCounter;
pub use diff::{BufferDiff, ChangeRun};
pub use entry_view::EntryView;
pub use mood_bar::MoodBar;
pub use panel::{JournalPanel, PanelGeometry};
pub use popover::SuggestionPopover;
pub use scramble::Scrambler;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a [`Buffer`] within a given [`Rect`].
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}
