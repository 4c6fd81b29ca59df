#![forbid(unsafe_code)]

//! The journal application model.
//!
//! [`JournalApp`] holds one [`EditBuffer`], the mood selector, and the
//! dictionary, and implements [`Model`] over [`Msg`]. Committing writes the
//! entry to its [`EntrySink`] and ends the session; an over-budget commit
//! only flags the counter.

use std::cell::RefCell;

use chrono::Local;
use tracing::{debug, error, info};

use qj_text::{CommitOutcome, Dictionary, EditBuffer, Entry, InsertOutcome, MoodSelector};
use qj_widgets::{
    Buffer, CharCounter, JournalPanel, PanelGeometry, Scrambler, SuggestionPopover, Widget,
};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::journal::EntrySink;
use crate::keymap::{Msg, is_insertable};
use crate::program::{Cmd, Model};

/// Presentation settings taken from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub title: String,
    pub padding: u16,
    pub suggestion_limit: usize,
    pub private: bool,
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            padding: config.padding,
            suggestion_limit: config.suggestion_limit,
            private: config.private,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The entry was written.
    Saved(Entry),
    /// The user left without committing.
    Discarded,
}

pub struct JournalApp {
    editor: EditBuffer,
    mood: MoodSelector,
    dict: Dictionary,
    sink: Box<dyn EntrySink>,
    settings: AppSettings,
    /// Present in private mode.
    scrambler: Option<RefCell<Scrambler>>,
    saved: Option<Entry>,
    failure: Option<Error>,
}

impl JournalApp {
    /// # Errors
    ///
    /// Returns [`Error::Editor`] when the editor settings in `config` are
    /// invalid.
    pub fn new(config: &Config, dict: Dictionary, sink: Box<dyn EntrySink>) -> Result<Self> {
        let settings = AppSettings::from(config);
        let scrambler = settings.private.then(|| RefCell::new(Scrambler::new()));
        Ok(Self {
            editor: EditBuffer::new(config.editor_config())?,
            mood: MoodSelector::new(),
            dict,
            sink,
            settings,
            scrambler,
            saved: None,
            failure: None,
        })
    }

    /// Replace the private-mode scrambler (no effect outside private mode).
    #[must_use]
    pub fn with_scrambler(mut self, scrambler: Scrambler) -> Self {
        if self.settings.private {
            self.scrambler = Some(RefCell::new(scrambler));
        }
        self
    }

    #[must_use]
    pub fn editor(&self) -> &EditBuffer {
        &self.editor
    }

    #[must_use]
    pub fn mood(&self) -> &MoodSelector {
        &self.mood
    }

    #[must_use]
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Consume the app after the loop ends.
    ///
    /// # Errors
    ///
    /// Returns the journal write failure, if the commit could not be
    /// persisted. The error carries the entry.
    pub fn finish(self) -> Result<SessionOutcome> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        Ok(match self.saved {
            Some(entry) => SessionOutcome::Saved(entry),
            None => SessionOutcome::Discarded,
        })
    }

    fn paste(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut accepted = 0usize;
        for c in normalized.chars() {
            let outcome = match c {
                '\n' => self.editor.insert_newline(),
                '\t' => self.editor.insert_char(' '),
                c if is_insertable(c) => self.editor.insert_char(c),
                _ => continue,
            };
            if outcome == InsertOutcome::Rejected {
                break;
            }
            accepted += 1;
        }
        debug!(accepted, offered = normalized.chars().count(), "paste applied");
    }

    fn commit(&mut self) -> Cmd<Msg> {
        match self.editor.commit(self.mood.current()) {
            CommitOutcome::Committed(entry) => {
                let now = Local::now().naive_local();
                match self.sink.append(&entry, now) {
                    Ok(()) => {
                        let chars = entry.text.chars().count();
                        self.saved = Some(entry);
                        Cmd::batch(vec![
                            Cmd::log(format!("entry saved ({chars} chars)")),
                            Cmd::quit(),
                        ])
                    }
                    Err(err) => {
                        error!(%err, "journal write failed");
                        self.failure = Some(err);
                        Cmd::quit()
                    }
                }
            }
            CommitOutcome::Empty => Cmd::none(),
            CommitOutcome::Overflow { .. } => Cmd::none(),
        }
    }
}

impl Model for JournalApp {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        info!(
            entries = self.dict.len(),
            limit = self.editor.char_limit(),
            private = self.settings.private,
            "journal session opened"
        );
        Cmd::none()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Insert(c) => {
                self.editor.insert_char(c);
            }
            Msg::Newline => {
                self.editor.insert_newline();
            }
            Msg::DeleteChar => {
                self.editor.delete_last_char();
            }
            Msg::DeleteWord => self.editor.delete_last_word(),
            Msg::MoodPrev => {
                self.mood.previous();
            }
            Msg::MoodNext => {
                self.mood.next();
            }
            Msg::Paste(text) => self.paste(&text),
            Msg::Commit => return self.commit(),
            Msg::Quit => return Cmd::quit(),
            Msg::Resize { .. } | Msg::Ignore => {}
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Buffer) {
        let geometry = PanelGeometry::new(
            frame.width(),
            self.settings.padding,
            self.editor.char_limit(),
        );
        let mut layout = self.editor.render(geometry.text_width(), &self.dict);
        if let Some(scrambler) = &self.scrambler {
            layout = scrambler.borrow_mut().scramble_layout(layout);
        }

        let counter =
            CharCounter::new(self.editor.remaining()).overflow(self.editor.overflow_flagged());
        JournalPanel::new(geometry, layout.lines())
            .title(&self.settings.title)
            .mood(self.mood.current())
            .counter(counter)
            .render(frame.area(), frame);

        if self.settings.suggestion_limit == 0 {
            return;
        }
        let popover = SuggestionPopover::new(
            self.editor
                .current_suggestion_entries(&self.dict, self.settings.suggestion_limit),
        );
        if !popover.is_empty() {
            let area = popover.placement(
                self.editor.current_line().chars().count(),
                layout.height(),
                frame.area(),
            );
            popover.render(area, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigEnv, ConfigLayer};
    use crate::journal::MemorySink;
    use qj_text::{CURSOR_GLYPH, Mood};
    use qj_widgets::CellAttrs;
    use std::path::Path;

    fn config(layer: ConfigLayer) -> Config {
        let env = ConfigEnv {
            home: Some(Path::new("/home/test").to_path_buf()),
            config_home: None,
        };
        Config::resolve(layer, &env).unwrap()
    }

    fn app_with(layer: ConfigLayer) -> JournalApp {
        let dict = Dictionary::from_rows([("🙂", "smile"), ("😏", "smirk"), ("🎉", "tada")]);
        JournalApp::new(&config(layer), dict, Box::new(MemorySink::new())).unwrap()
    }

    fn app() -> JournalApp {
        app_with(ConfigLayer::default())
    }

    fn type_str(app: &mut JournalApp, text: &str) {
        for c in text.chars() {
            let _ = app.update(Msg::Insert(c));
        }
    }

    fn frame(app: &JournalApp) -> Buffer {
        let mut buf = Buffer::new(40, 12);
        app.view(&mut buf);
        buf
    }

    #[test]
    fn typing_and_deleting() {
        let mut app = app();
        type_str(&mut app, "hello world");
        let _ = app.update(Msg::DeleteWord);
        assert_eq!(app.editor().text(), "hello");
        let _ = app.update(Msg::DeleteChar);
        assert_eq!(app.editor().text(), "hell");
        let _ = app.update(Msg::Newline);
        assert_eq!(app.editor().text(), "hell\n");
    }

    #[test]
    fn mood_keys_cycle() {
        let mut app = app();
        let _ = app.update(Msg::MoodNext);
        assert_eq!(app.mood().current(), Mood::Good);
        let _ = app.update(Msg::MoodPrev);
        let _ = app.update(Msg::MoodPrev);
        assert_eq!(app.mood().current(), Mood::Bad);
    }

    #[test]
    fn commit_saves_and_quits() {
        let mut app = app();
        type_str(&mut app, "good day");
        let _ = app.update(Msg::MoodNext);
        let cmd = app.update(Msg::Commit);
        assert!(matches!(cmd, Cmd::Batch(_)));
        assert_eq!(
            app.finish().unwrap(),
            SessionOutcome::Saved(Entry {
                text: "good day".into(),
                mood: Mood::Good,
            })
        );
    }

    #[test]
    fn empty_commit_is_noop() {
        let mut app = app();
        assert!(matches!(app.update(Msg::Commit), Cmd::None));
        assert_eq!(app.finish().unwrap(), SessionOutcome::Discarded);
    }

    #[test]
    fn overflowing_paste_is_cut_at_limit() {
        let mut app = app_with(ConfigLayer {
            max_chars: Some(5),
            ..ConfigLayer::default()
        });
        let _ = app.update(Msg::Paste("abc\r\ndefg".into()));
        assert_eq!(app.editor().text(), "abc\nd");
        assert!(app.editor().overflow_flagged());
    }

    #[test]
    fn paste_drops_unsupported_chars() {
        let mut app = app();
        let _ = app.update(Msg::Paste("café\tok".into()));
        assert_eq!(app.editor().text(), "caf ok");
    }

    struct FailingSink;

    impl EntrySink for FailingSink {
        fn append(&mut self, entry: &Entry, _at: chrono::NaiveDateTime) -> Result<()> {
            Err(Error::Journal {
                path: "/dev/full".into(),
                entry: entry.clone(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    #[test]
    fn failed_write_surfaces_entry() {
        let mut app = JournalApp::new(
            &config(ConfigLayer::default()),
            Dictionary::new(),
            Box::new(FailingSink),
        )
        .unwrap();
        type_str(&mut app, "precious");
        assert!(matches!(app.update(Msg::Commit), Cmd::Quit));
        let err = app.finish().unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.unsaved_entry().map(|e| e.text.as_str()), Some("precious"));
    }

    #[test]
    fn view_draws_panel_and_counter() {
        let mut app = app();
        type_str(&mut app, "hi");
        let buf = frame(&app);
        assert!(buf.row_text(0).starts_with("┌[QuickJournal]"));
        assert_eq!(buf.row_text(2), format!("│ hi{CURSOR_GLYPH}{}│", " ".repeat(34)));
        assert!(buf.row_text(6).ends_with("[138]┘"));
    }

    #[test]
    fn refused_insert_makes_counter_blink() {
        let mut app = app_with(ConfigLayer {
            max_chars: Some(3),
            ..ConfigLayer::default()
        });
        type_str(&mut app, "abc");
        // 3 / 36 = 0, + 2 padding + 1 line: the counter sits on row 3.
        let counter_attrs = |buf: &Buffer| -> Vec<CellAttrs> {
            (36..39).filter_map(|x| buf.get(x, 3)).map(|c| c.attrs).collect()
        };
        let full = frame(&app);
        assert!(full.row_text(3).ends_with("[0]┘"));
        assert_eq!(counter_attrs(&full), vec![CellAttrs::empty(); 3]);

        let _ = app.update(Msg::Insert('d'));
        assert_eq!(app.editor().text(), "abc");
        assert!(app.editor().overflow_flagged());
        let refused = frame(&app);
        assert!(refused.row_text(3).ends_with("[0]┘"));
        assert_eq!(
            counter_attrs(&refused),
            vec![CellAttrs::REVERSE | CellAttrs::BLINK; 3]
        );

        let _ = app.update(Msg::DeleteChar);
        assert_eq!(counter_attrs(&frame(&app)), vec![CellAttrs::empty(); 3]);
    }

    #[test]
    fn view_shows_suggestions_for_open_shortcode() {
        let mut app = app();
        type_str(&mut app, "yay :ta");
        let buf = frame(&app);
        assert!(buf.row_text(4).contains("🎉 :tada:"), "{}", buf.row_text(4));
    }

    #[test]
    fn suggestions_can_be_disabled() {
        let mut app = app_with(ConfigLayer {
            suggestion_limit: Some(0),
            ..ConfigLayer::default()
        });
        type_str(&mut app, "yay :ta");
        let buf = frame(&app);
        assert!(!buf.row_text(4).contains(":tada:"));
    }

    #[test]
    fn private_mode_scrambles_display_only() {
        let mut app = app_with(ConfigLayer {
            private: Some(true),
            ..ConfigLayer::default()
        })
        .with_scrambler(Scrambler::with_seed(9));
        type_str(&mut app, "secret, ok");
        let buf = frame(&app);
        let row = buf.row_text(2);
        assert!(!row.contains("secret"));
        assert_eq!(row.chars().nth(8), Some(','));
        assert_eq!(row.chars().nth(9), Some(' '));
        assert_eq!(app.editor().text(), "secret, ok");
    }
}
