#![forbid(unsafe_code)]

//! Key bindings.
//!
//! | Key | Message |
//! |-----|---------|
//! | printable ASCII (`' '..='~'`) | [`Msg::Insert`] |
//! | Enter | [`Msg::Newline`] |
//! | Backspace | [`Msg::DeleteChar`] |
//! | Ctrl+U | [`Msg::DeleteWord`] |
//! | Ctrl+G | [`Msg::Commit`] |
//! | Esc, Ctrl+C | [`Msg::Quit`] |
//! | Left / Right | [`Msg::MoodPrev`] / [`Msg::MoodNext`] |
//!
//! Everything else, including key releases and non-ASCII characters, maps to
//! [`Msg::Ignore`].

use qj_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};

/// Messages driving [`crate::app::JournalApp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Insert(char),
    Newline,
    DeleteChar,
    DeleteWord,
    Commit,
    Quit,
    MoodPrev,
    MoodNext,
    Resize { width: u16, height: u16 },
    Paste(String),
    Ignore,
}

/// Whether `c` is accepted as typed input.
#[must_use]
pub const fn is_insertable(c: char) -> bool {
    matches!(c, ' '..='~')
}

impl From<KeyEvent> for Msg {
    fn from(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Msg::Ignore;
        }
        if key.ctrl() {
            return match key.code {
                KeyCode::Char('u') => Msg::DeleteWord,
                KeyCode::Char('g') => Msg::Commit,
                KeyCode::Char('c') => Msg::Quit,
                _ => Msg::Ignore,
            };
        }
        match key.code {
            KeyCode::Char(c)
                if is_insertable(c)
                    && !key.modifiers.intersects(Modifiers::ALT | Modifiers::SUPER) =>
            {
                Msg::Insert(c)
            }
            KeyCode::Enter => Msg::Newline,
            KeyCode::Backspace => Msg::DeleteChar,
            KeyCode::Escape => Msg::Quit,
            KeyCode::Left => Msg::MoodPrev,
            KeyCode::Right => Msg::MoodNext,
            _ => Msg::Ignore,
        }
    }
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => key.into(),
            Event::Resize { width, height } => Msg::Resize { width, height },
            Event::Paste(text) => Msg::Paste(text),
        }
    }
}
