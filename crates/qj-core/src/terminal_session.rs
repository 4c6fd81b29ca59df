#![forbid(unsafe_code)]

//! Terminal session guard for the journal panel.
//!
//! Opening a [`TerminalSession`] puts the terminal in the state the editor
//! draws in; dropping it (or panicking while it is open) puts it back.
//!
//! | Mode | Entered | Restored |
//! |------|---------|----------|
//! | raw input | always | last |
//! | hidden cursor | always | shown again |
//! | alternate screen | [`SessionOptions::alternate_screen`] | left |
//! | bracketed paste | [`SessionOptions::bracketed_paste`] | disabled |
//!
//! The modes that are currently on live in one process-wide record. `Drop`
//! and the panic hook both restore from it, so a panic never disables a mode
//! the session did not enable, and only one session can be open at a time.
//!
//! ```no_run
//! use qj_core::terminal_session::{SessionOptions, TerminalSession};
//!
//! let mut session = TerminalSession::new(SessionOptions {
//!     alternate_screen: true,
//!     bracketed_paste: true,
//! })?;
//! let first = session.next_event(std::time::Duration::from_millis(100))?;
//! drop(session); // terminal restored
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use bitflags::bitflags;
use crossterm::{cursor, event as ct, execute, terminal};

use crate::event::Event;

bitflags! {
    /// Terminal modes a session has switched on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Modes: u8 {
        const RAW        = 0b0001;
        const HIDDEN     = 0b0010;
        const ALT_SCREEN = 0b0100;
        const PASTE      = 0b1000;
    }
}

/// Modes on right now. Empty means no session is open.
static ACTIVE: AtomicU8 = AtomicU8::new(0);

fn active() -> Modes {
    Modes::from_bits_truncate(ACTIVE.load(Ordering::SeqCst))
}

/// Optional modes for [`TerminalSession::new`]. Raw input and the hidden
/// cursor are not optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Draw on the alternate screen so the shell's scrollback survives.
    pub alternate_screen: bool,
    /// Deliver pasted text as one [`Event::Paste`] instead of keystrokes.
    pub bracketed_paste: bool,
}

/// Exclusive handle on the terminal while the panel is up.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Switch the terminal into editing mode.
    ///
    /// # Errors
    ///
    /// Fails if another session is open or a mode cannot be entered. Modes
    /// entered before the failure are restored.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();
        if ACTIVE
            .compare_exchange(0, Modes::RAW.bits(), Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(io::Error::other("a terminal session is already open"));
        }
        if let Err(err) = terminal::enable_raw_mode() {
            ACTIVE.store(0, Ordering::SeqCst);
            return Err(err);
        }
        // From here on, Drop restores whatever was entered.
        let session = Self { _private: () };

        let mut out = io::stdout();
        if options.alternate_screen {
            execute!(
                out,
                terminal::EnterAlternateScreen,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
            mark(Modes::ALT_SCREEN);
        }
        if options.bracketed_paste {
            execute!(out, ct::EnableBracketedPaste)?;
            mark(Modes::PASTE);
        }
        execute!(out, cursor::Hide)?;
        mark(Modes::HIDDEN);

        #[cfg(feature = "tracing")]
        tracing::info!(modes = ?active(), "terminal session opened");
        Ok(session)
    }

    /// Terminal size in (columns, rows), never below 1x1.
    ///
    /// # Errors
    ///
    /// Returns the query error.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let (width, height) = terminal::size()?;
        Ok((width.max(1), height.max(1)))
    }

    /// Wait up to `timeout` for input.
    ///
    /// `Ok(None)` on timeout, and for input with no [`Event`] counterpart.
    ///
    /// # Errors
    ///
    /// Returns terminal read errors.
    pub fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !ct::poll(timeout)? {
            return Ok(None);
        }
        Ok(Event::from_crossterm(ct::read()?))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        #[cfg(feature = "tracing")]
        tracing::info!("terminal session closed");
    }
}

fn mark(mode: Modes) {
    ACTIVE.fetch_or(mode.bits(), Ordering::SeqCst);
}

/// Undo every active mode, newest first, then release the session.
fn restore() {
    let modes = active();
    if modes.is_empty() {
        return;
    }
    let mut out = io::stdout();
    if modes.contains(Modes::PASTE) {
        let _ = execute!(out, ct::DisableBracketedPaste);
    }
    if modes.contains(Modes::HIDDEN) {
        let _ = execute!(out, cursor::Show);
    }
    if modes.contains(Modes::ALT_SCREEN) {
        let _ = execute!(out, terminal::LeaveAlternateScreen);
    }
    if modes.contains(Modes::RAW) {
        let _ = terminal::disable_raw_mode();
    }
    let _ = out.flush();
    ACTIVE.store(0, Ordering::SeqCst);
}

/// Restore the terminal before the panic message prints, so it is readable.
fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_plain_screen() {
        let opts = SessionOptions::default();
        assert!(!opts.alternate_screen);
        assert!(!opts.bracketed_paste);
    }

    #[test]
    fn restored_modes_cover_every_optional_mode() {
        let all = Modes::RAW | Modes::HIDDEN | Modes::ALT_SCREEN | Modes::PASTE;
        assert_eq!(all, Modes::all());
        assert_eq!(Modes::from_bits_truncate(0xff), all);
    }
}
