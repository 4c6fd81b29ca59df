#![forbid(unsafe_code)]

//! QuickJournal: rapid micro-journaling in a terminal panel.
//!
//! Type a short entry, pick a mood with the arrow keys, and send it with
//! Ctrl+G; the entry is appended to today's markdown file. `:shortcode:`
//! emoji are suggested as you type and can be previewed live.
//!
//! This crate re-exports the workspace's public surface and hosts the
//! `quickjournal` binary.
//!
//! ```ignore
//! use quickjournal::prelude::*;
//!
//! let dict = Dictionary::from_rows([("🙂", "smile")]);
//! let mut editor = EditBuffer::new(EditorConfig::new(140))?;
//! for c in "hi :smile:".chars() {
//!     editor.insert_char(c);
//! }
//! let layout = editor.render(40, &dict);
//! ```

pub mod cli;

pub use cli::{Cli, run, run_from_env};

pub use qj_core as core;
pub use qj_runtime as runtime;
pub use qj_text as text;
pub use qj_widgets as widgets;

pub mod prelude {
    pub use qj_runtime::{
        Config, EntrySink, Error, FileSink, JournalApp, MemorySink, Program, ProgramConfig,
        Result, SessionOutcome,
    };
    pub use qj_text::{
        CommitOutcome, Dictionary, EditBuffer, EditorConfig, Entry, InsertOutcome, Mood,
        MoodSelector, WrappedLayout, expand, suggest, wrap_text,
    };
    pub use qj_widgets::{Buffer, JournalPanel, PanelGeometry, SuggestionPopover, Widget};
}
