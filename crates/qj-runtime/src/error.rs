#![forbid(unsafe_code)]

use std::path::PathBuf;

use qj_text::{ConfigError, Entry};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {}", problems.join("; "))]
    Config { problems: Vec<String> },

    #[error("config file not found: {path}")]
    MissingConfig { path: PathBuf },

    #[error("emoji dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("editor: {0}")]
    Editor(#[from] ConfigError),

    #[error("could not write journal entry to {path}: {source}")]
    Journal {
        path: PathBuf,
        /// The entry that failed to persist.
        entry: Entry,
        #[source]
        source: std::io::Error,
    },

    #[error("HOME is not set; pass --journal-dir and --emoji-csv explicitly")]
    MissingHome,
}

impl Error {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigParse { .. }
            | Self::Config { .. }
            | Self::MissingConfig { .. }
            | Self::Editor(_)
            | Self::MissingHome => 2,
            Self::Journal { .. } => 3,
            Self::Io(_) | Self::Dictionary { .. } => 1,
        }
    }

    #[must_use]
    pub fn config(problem: impl Into<String>) -> Self {
        Self::Config {
            problems: vec![problem.into()],
        }
    }

    /// The unsaved entry carried by a failed journal write.
    #[must_use]
    pub fn unsaved_entry(&self) -> Option<&Entry> {
        match self {
            Self::Journal { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
