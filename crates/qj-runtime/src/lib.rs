#![forbid(unsafe_code)]

//! Runtime for QuickJournal: the event loop and everything around it.
//!
//! # Role in QuickJournal
//! `qj-runtime` wires the pure editing core (`qj-text`) and the widgets
//! (`qj-widgets`) to a terminal. It owns the [`Program`] loop, the
//! [`JournalApp`] model driven by it, the [`Presenter`] that writes frames,
//! and the edges of the process: configuration, the emoji dictionary file,
//! and the dated journal files.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`program`] | `Model`/`Cmd` update-view loop over an [`EventSource`] |
//! | [`presenter`] | Diff runs to ANSI output via crossterm |
//! | [`keymap`] | Key events to [`Msg`] |
//! | [`app`] | [`JournalApp`]: editor, mood, commit |
//! | [`config`] | Layered TOML/flag configuration |
//! | [`dictionary`] | CSV emoji dictionary loader |
//! | [`journal`] | Entry formatting and [`EntrySink`]s |
//! | [`error`] | [`Error`] and exit codes |

pub mod app;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod journal;
pub mod keymap;
pub mod presenter;
pub mod program;

pub use app::{AppSettings, JournalApp, SessionOutcome};
pub use config::{Config, ConfigEnv, ConfigLayer};
pub use dictionary::{load_dictionary, read_dictionary};
pub use error::{Error, Result};
pub use journal::{EntrySink, FileSink, MemorySink, format_entry};
pub use keymap::Msg;
pub use presenter::Presenter;
pub use program::{Cmd, EventSource, Model, Program, ProgramConfig, ScriptedEvents};
