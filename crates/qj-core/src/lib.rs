#![forbid(unsafe_code)]

//! Core: terminal lifecycle, key events, geometry, and logging bootstrap.
//!
//! # Role in QuickJournal
//! `qj-core` is the input layer. It owns terminal session setup/teardown and
//! the normalized event types that the runtime consumes. Text handling
//! (`qj-text`) and drawing (`qj-widgets`) never touch the terminal, so this
//! crate is the only bridge between terminal I/O and the deterministic
//! editing pipeline.
//!
//! # Primary responsibilities
//! - **TerminalSession**: RAII lifecycle for raw mode, alt-screen, and cleanup.
//! - **Event**: canonical input events (keys, paste, resize).
//! - **Rect**: cell-grid geometry shared by layout and widgets.
//! - **logging**: file-backed `tracing` subscriber (feature `tracing`).

pub mod event;
pub mod geometry;

#[cfg(feature = "tracing")]
pub mod logging;

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
pub mod terminal_session;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use geometry::Rect;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
