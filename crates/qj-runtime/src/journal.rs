#![forbid(unsafe_code)]

//! Journal persistence.
//!
//! Entries are appended to one markdown file per day,
//! `<journal_dir>/<YYYY-MM-DD>-qj.md`, each as a quote block:
//!
//! ```text
//!
//! > `14:03:27` -- feeling 🙂
//! >
//! > first line
//! > second line
//!
//!
//! &nbsp;
//! ```
//!
//! The committed text is written raw; shortcodes are never expanded on
//! disk.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::info;

use qj_text::Entry;

use crate::error::{Error, Result};

/// Render one entry as appended to the day file.
#[must_use]
pub fn format_entry(entry: &Entry, time: NaiveTime) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "\n> `{}` -- feeling {}\n>\n",
        time.format("%H:%M:%S"),
        entry.mood.glyph()
    );
    for line in entry.text.split('\n') {
        let _ = writeln!(out, "> {line}");
    }
    out.push_str("\n\n&nbsp;\n");
    out
}

/// File name for entries written on `date`.
#[must_use]
pub fn day_file_name(date: NaiveDate) -> String {
    format!("{}-qj.md", date.format("%Y-%m-%d"))
}

/// Destination for committed entries.
pub trait EntrySink {
    /// Persist `entry`, stamped with `at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Journal`] (carrying the entry) when it could not be
    /// written.
    fn append(&mut self, entry: &Entry, at: NaiveDateTime) -> Result<()>;
}

/// Appends to dated markdown files in a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file entries written on `date` go to.
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(day_file_name(date))
    }

    fn write_block(path: &Path, block: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(block.as_bytes())?;
        file.flush()
    }
}

impl EntrySink for FileSink {
    fn append(&mut self, entry: &Entry, at: NaiveDateTime) -> Result<()> {
        let path = self.path_for(at.date());
        let block = format_entry(entry, at.time());
        match Self::write_block(&path, &block) {
            Ok(()) => {
                info!(path = %path.display(), bytes = block.len(), "entry appended");
                Ok(())
            }
            Err(source) => Err(Error::Journal {
                path,
                entry: entry.clone(),
                source,
            }),
        }
    }
}

/// Keeps entries in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Vec<(NaiveDateTime, Entry)>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[(NaiveDateTime, Entry)] {
        &self.entries
    }
}

impl EntrySink for MemorySink {
    fn append(&mut self, entry: &Entry, at: NaiveDateTime) -> Result<()> {
        self.entries.push((at, entry.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qj_text::Mood;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    fn entry(text: &str, mood: Mood) -> Entry {
        Entry {
            text: text.to_owned(),
            mood,
        }
    }

    #[test]
    fn single_line_block() {
        let block = format_entry(&entry("hello :smile:", Mood::Good), at(9, 5, 7).time());
        assert_eq!(
            block,
            "\n> `09:05:07` -- feeling 🙂\n>\n> hello :smile:\n\n\n&nbsp;\n"
        );
    }

    #[test]
    fn each_line_is_quoted() {
        let block = format_entry(&entry("one\n\nthree", Mood::Awful), at(23, 0, 0).time());
        assert_eq!(
            block,
            "\n> `23:00:00` -- feeling 😣\n>\n> one\n> \n> three\n\n\n&nbsp;\n"
        );
    }

    #[test]
    fn file_name_is_dated() {
        assert_eq!(day_file_name(at(0, 0, 0).date()), "2024-03-09-qj.md");
    }

    #[test]
    fn file_sink_appends_and_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let journal = dir.path().join("Documents").join("Journal");
        let mut sink = FileSink::new(&journal);

        sink.append(&entry("first", Mood::Neutral), at(8, 0, 0)).unwrap();
        sink.append(&entry("second", Mood::Great), at(20, 30, 0)).unwrap();

        let written = std::fs::read_to_string(journal.join("2024-03-09-qj.md")).unwrap();
        assert_eq!(
            written,
            format!(
                "{}{}",
                format_entry(&entry("first", Mood::Neutral), at(8, 0, 0).time()),
                format_entry(&entry("second", Mood::Great), at(20, 30, 0).time()),
            )
        );
    }

    #[test]
    fn unwritable_dir_returns_entry() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut sink = FileSink::new(blocker.join("journal"));

        let err = sink.append(&entry("rescue me", Mood::Bad), at(1, 2, 3)).unwrap_err();
        assert_eq!(err.unsaved_entry().map(|e| e.text.as_str()), Some("rescue me"));
    }

    #[test]
    fn memory_sink_records() {
        let mut sink = MemorySink::new();
        sink.append(&entry("x", Mood::Good), at(1, 1, 1)).unwrap();
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(sink.entries()[0].1.text, "x");
    }
}
