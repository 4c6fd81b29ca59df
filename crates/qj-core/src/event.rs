#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! All events derive `Clone`, `PartialEq`, and `Eq` for use in tests and
//! pattern matching. Terminal-specific events are converted with
//! [`Event::from_crossterm`] (feature `crossterm`); anything the editor has
//! no use for (mouse reports, media keys) converts to `None`.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when not available from the terminal
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Text delivered by bracketed paste.
    Paste(String),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with no modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// The keys the journal panel reacts to. Other keys never become events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Escape,
    Backspace,
    /// Previous mood.
    Left,
    /// Next mood.
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
mod crossterm_compat {
    use super::*;
    use crossterm::event as ct;

    impl Event {
        /// Convert a Crossterm event, dropping kinds the editor does not handle.
        #[must_use]
        pub fn from_crossterm(event: ct::Event) -> Option<Self> {
            match event {
                ct::Event::Key(key) => KeyEvent::from_crossterm(key).map(Event::Key),
                ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
                ct::Event::Paste(text) => Some(Event::Paste(text)),
                ct::Event::FocusGained | ct::Event::FocusLost | ct::Event::Mouse(_) => None,
            }
        }
    }

    impl KeyEvent {
        #[must_use]
        pub fn from_crossterm(key: ct::KeyEvent) -> Option<Self> {
            let code = match key.code {
                ct::KeyCode::Char(c) => KeyCode::Char(c),
                ct::KeyCode::Enter => KeyCode::Enter,
                ct::KeyCode::Esc => KeyCode::Escape,
                ct::KeyCode::Backspace => KeyCode::Backspace,
                ct::KeyCode::Left => KeyCode::Left,
                ct::KeyCode::Right => KeyCode::Right,
                _ => return None,
            };
            let kind = match key.kind {
                ct::KeyEventKind::Press => KeyEventKind::Press,
                ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
                ct::KeyEventKind::Release => KeyEventKind::Release,
            };
            Some(Self {
                code,
                modifiers: Modifiers::from_crossterm(key.modifiers),
                kind,
            })
        }
    }

    impl Modifiers {
        #[must_use]
        pub fn from_crossterm(mods: ct::KeyModifiers) -> Self {
            let mut out = Modifiers::NONE;
            if mods.contains(ct::KeyModifiers::SHIFT) {
                out |= Modifiers::SHIFT;
            }
            if mods.contains(ct::KeyModifiers::ALT) {
                out |= Modifiers::ALT;
            }
            if mods.contains(ct::KeyModifiers::CONTROL) {
                out |= Modifiers::CTRL;
            }
            if mods.intersects(ct::KeyModifiers::SUPER | ct::KeyModifiers::META) {
                out |= Modifiers::SUPER;
            }
            out
        }
    }

}
