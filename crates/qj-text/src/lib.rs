#![forbid(unsafe_code)]

//! Text layout and editing engine for QuickJournal.
//!
//! # Role in QuickJournal
//! `qj-text` is the pure core. It takes the raw entry buffer plus a target
//! display width and produces a wrapped, render-ready layout with cursor
//! placement, optional shortcode expansion, and ranked autocomplete
//! suggestions. Nothing in this crate touches the terminal or the
//! filesystem.
//!
//! # Primary responsibilities
//! - **wrap**: greedy word wrap with hard mid-word fallback.
//! - **shortcode**: the shortcode [`Dictionary`] and `:code:` expansion.
//! - **suggest**: two-tier prefix/substring ranking of shortcodes.
//! - **editor**: the [`EditBuffer`] state machine with its character budget.
//! - **mood**: the cyclic [`MoodSelector`] attached to committed entries.
//!
//! Columns are counted in Unicode scalar values: every `char` occupies one
//! column.

pub mod editor;
pub mod layout;
pub mod mood;
pub mod shortcode;
pub mod suggest;
pub mod wrap;

pub use editor::{
    CommitOutcome, ConfigError, DEFAULT_CHAR_LIMIT, EditBuffer, EditorConfig, Entry, InsertOutcome,
    text_width_for,
};
pub use layout::{CURSOR_GLYPH, CursorPosition, WrappedLayout};
pub use mood::{Mood, MoodSelector};
pub use shortcode::{Dictionary, expand};
pub use suggest::{Suggestion, suggest, suggest_entries};
pub use wrap::{BreakKind, LineBreak, Separators, break_offsets, wrap_line, wrap_text};

/// Number of columns occupied by `text`.
#[inline]
#[must_use]
pub fn column_width(text: &str) -> usize {
    text.chars().count()
}
