#![forbid(unsafe_code)]

//! The mood attached to a committed entry.

/// A mood on the fixed five-step scale, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    Awful,
    Bad,
    #[default]
    Neutral,
    Good,
    Great,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Mood; 5] = [
        Mood::Awful,
        Mood::Bad,
        Mood::Neutral,
        Mood::Good,
        Mood::Great,
    ];

    /// Glyph shown in the mood bar and written to the journal.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Mood::Awful => "😣",
            Mood::Bad => "🙁",
            Mood::Neutral => "😐",
            Mood::Good => "🙂",
            Mood::Great => "😁",
        }
    }

    /// Position in [`Mood::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Left/right cycling selector over [`Mood::ALL`], wrapping at both ends.
///
/// Starts at the middle of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodSelector {
    current: Mood,
}

impl MoodSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_mood(mood: Mood) -> Self {
        Self { current: mood }
    }

    #[must_use]
    pub const fn current(&self) -> Mood {
        self.current
    }

    /// Step towards the start of the scale, wrapping to the end.
    pub fn previous(&mut self) -> Mood {
        let len = Mood::ALL.len();
        self.current = Mood::ALL[(self.current.index() + len - 1) % len];
        self.current
    }

    /// Step towards the end of the scale, wrapping to the start.
    pub fn next(&mut self) -> Mood {
        let len = Mood::ALL.len();
        self.current = Mood::ALL[(self.current.index() + 1) % len];
        self.current
    }
}
