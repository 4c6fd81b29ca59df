#![forbid(unsafe_code)]

//! The entry edit buffer.
//!
//! [`EditBuffer`] owns the raw entry text and its character budget. Edits
//! only ever happen at the end of the buffer (the cursor is always at the
//! end), so the operations are append, pop, and truncate.
//!
//! # Character budget
//!
//! No character is accepted once the length reaches `char_limit`. The text
//! may still exceed the limit when set wholesale (see
//! [`EditBuffer::set_text`]); [`EditBuffer::remaining`] then goes negative and
//! [`EditBuffer::commit`] refuses until the text is trimmed.
//!
//! # Failure signalling
//!
//! | Condition | Signal | State change |
//! |-----------|--------|--------------|
//! | Insert at or above limit | [`InsertOutcome::Rejected`] | overflow flag set |
//! | Commit over limit | [`CommitOutcome::Overflow`] | overflow flag set |
//! | Commit of empty buffer | [`CommitOutcome::Empty`] | none |
//! | Delete on empty buffer | `None` | none |

use std::fmt;

use tracing::{debug, info, warn};

use crate::column_width;
use crate::layout::WrappedLayout;
use crate::mood::Mood;
use crate::shortcode::Dictionary;
use crate::suggest::{Suggestion, suggest, suggest_entries};
use crate::wrap::Separators;

/// Character budget used when none is configured.
pub const DEFAULT_CHAR_LIMIT: usize = 140;

/// Editor construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Maximum accepted characters (must be > 0).
    pub char_limit: usize,
    /// Expand shortcodes in the rendered layout.
    pub live_preview: bool,
    /// Characters the wrapper may break on.
    pub separators: Separators,
}

impl EditorConfig {
    #[must_use]
    pub fn new(char_limit: usize) -> Self {
        Self {
            char_limit,
            live_preview: false,
            separators: Separators::default(),
        }
    }

    #[must_use]
    pub fn live_preview(mut self, enabled: bool) -> Self {
        self.live_preview = enabled;
        self
    }

    #[must_use]
    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCharLimit`] when `char_limit` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.char_limit == 0 {
            return Err(ConfigError::ZeroCharLimit);
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_LIMIT)
    }
}

/// Invalid editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The character limit must be positive.
    ZeroCharLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCharLimit => write!(f, "character limit must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of an insert operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Accepted,
    /// The buffer is at its limit; nothing was changed.
    Rejected,
}

impl InsertOutcome {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A committed journal entry: raw text plus mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub mood: Mood,
}

/// Result of [`EditBuffer::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The entry was taken and the buffer reset.
    Committed(Entry),
    /// Nothing to commit.
    Empty,
    /// The text is over the limit by `excess` characters; nothing changed.
    Overflow { excess: usize },
}

/// Bounded entry buffer edited at its end.
#[derive(Debug, Clone)]
pub struct EditBuffer {
    text: String,
    config: EditorConfig,
    /// Set by a rejected insert or commit, cleared by deleting a character.
    overflow: bool,
}

impl EditBuffer {
    /// Create an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns the validation error when `config` is invalid.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            text: String::new(),
            config,
            overflow: false,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        column_width(&self.text)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn char_limit(&self) -> usize {
        self.config.char_limit
    }

    /// Characters left in the budget; negative when over the limit.
    #[must_use]
    pub fn remaining(&self) -> isize {
        self.config.char_limit as isize - self.len() as isize
    }

    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.len() > self.config.char_limit
    }

    /// Whether the last rejected operation has not been cleared yet.
    #[must_use]
    pub fn overflow_flagged(&self) -> bool {
        self.overflow
    }

    /// Append `c` if the buffer is below its limit.
    pub fn insert_char(&mut self, c: char) -> InsertOutcome {
        if self.len() >= self.config.char_limit {
            self.overflow = true;
            warn!(
                limit = self.config.char_limit,
                "insert rejected: character limit reached"
            );
            return InsertOutcome::Rejected;
        }
        self.text.push(c);
        debug!(len = self.len(), "char inserted");
        InsertOutcome::Accepted
    }

    /// Append a line separator, gated like [`EditBuffer::insert_char`].
    pub fn insert_newline(&mut self) -> InsertOutcome {
        self.insert_char('\n')
    }

    /// Remove the final character.
    pub fn delete_last_char(&mut self) -> Option<char> {
        let removed = self.text.pop()?;
        self.overflow = false;
        debug!(len = self.len(), "char deleted");
        Some(removed)
    }

    /// Truncate to just before the last space or newline, or clear the
    /// buffer when there is none.
    pub fn delete_last_word(&mut self) {
        match self.text.rfind([' ', '\n']) {
            Some(idx) => self.text.truncate(idx),
            None => self.text.clear(),
        }
        debug!(len = self.len(), "word deleted");
    }

    /// Replace the whole text, bypassing the insert gate.
    ///
    /// The text may exceed the limit; the overflow then shows through
    /// [`EditBuffer::remaining`].
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.overflow = false;
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.text.clear();
        self.overflow = false;
    }

    /// Lay out the buffer at `width` columns.
    ///
    /// `dict` is only consulted when live preview is enabled.
    #[must_use]
    pub fn render(&self, width: usize, dict: &Dictionary) -> WrappedLayout {
        let preview = self.config.live_preview.then_some(dict);
        WrappedLayout::build(&self.text, width, &self.config.separators, preview)
    }

    /// The final logical line (text after the last newline).
    #[must_use]
    pub fn current_line(&self) -> &str {
        self.text.rsplit('\n').next().unwrap_or_default()
    }

    /// The partially typed shortcode before the cursor, if one is open.
    ///
    /// Looks at the trailing word (text after the last space or newline). An
    /// odd number of colons in it means a shortcode is open; the query is
    /// the text after the last colon.
    #[must_use]
    pub fn pending_shortcode(&self) -> Option<&str> {
        pending_shortcode(&self.text)
    }

    /// Ranked suggestions for the open shortcode, or nothing.
    #[must_use]
    pub fn current_suggestions<'d>(&self, dict: &'d Dictionary, limit: usize) -> Vec<&'d str> {
        match self.pending_shortcode() {
            Some(query) => suggest(dict, query, limit),
            None => Vec::new(),
        }
    }

    /// [`EditBuffer::current_suggestions`] with glyphs attached.
    #[must_use]
    pub fn current_suggestion_entries<'d>(
        &self,
        dict: &'d Dictionary,
        limit: usize,
    ) -> Vec<Suggestion<'d>> {
        match self.pending_shortcode() {
            Some(query) => suggest_entries(dict, query, limit),
            None => Vec::new(),
        }
    }

    /// Take the text for persistence and reset the buffer.
    ///
    /// Refuses without mutating the text when the buffer is empty or over
    /// its limit.
    pub fn commit(&mut self, mood: Mood) -> CommitOutcome {
        if self.text.is_empty() {
            return CommitOutcome::Empty;
        }
        let len = self.len();
        if len > self.config.char_limit {
            self.overflow = true;
            let excess = len - self.config.char_limit;
            warn!(excess, "commit refused: over character limit");
            return CommitOutcome::Overflow { excess };
        }
        let text = std::mem::take(&mut self.text);
        self.overflow = false;
        info!(chars = len, mood = mood.glyph(), "entry committed");
        CommitOutcome::Committed(Entry { text, mood })
    }
}

/// Wrap width of the text area inside a bordered panel `panel_width` columns
/// wide with `padding` blank columns on each side.
///
/// One further column is reserved for the cursor glyph.
#[must_use]
pub const fn text_width_for(panel_width: usize, padding: usize) -> usize {
    panel_width.saturating_sub(2 * padding + 3)
}

/// See [`EditBuffer::pending_shortcode`].
#[must_use]
pub fn pending_shortcode(text: &str) -> Option<&str> {
    let word_start = text.rfind([' ', '\n']).map_or(0, |i| i + 1);
    let word = &text[word_start..];
    if word.matches(':').count() % 2 == 0 {
        return None;
    }
    let last_colon = word.rfind(':')?;
    let query = &word[last_colon + 1..];
    if query.contains(' ') {
        return None;
    }
    Some(query)
}
