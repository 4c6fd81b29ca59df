#![forbid(unsafe_code)]

//! File-backed `tracing` bootstrap.
//!
//! The editor owns the terminal in raw mode, so log output can never go to
//! stdout or stderr. Events are appended to a log file instead, filtered by
//! the `QJ_LOG` environment variable (standard `EnvFilter` syntax) and
//! falling back to [`LogConfig::default_directive`].
//!
//! With no log file configured, [`init`] installs nothing and every event is
//! discarded by the default no-op dispatcher.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

pub use tracing::{debug, error, info, trace, warn};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "QJ_LOG";

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log file, opened in append mode. `None` disables logging.
    pub path: Option<PathBuf>,
    /// Filter used when `QJ_LOG` is unset or invalid.
    pub default_directive: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_directive: "warn".to_owned(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&self.default_directive))
    }
}

/// Build a plain-text subscriber writing to `file`.
pub fn file_subscriber(config: &LogConfig, file: File) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(config.filter())
        .with_ansi(false)
        .with_target(true)
        .finish()
}

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled or a global subscriber was
/// already installed.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(config: &LogConfig) -> io::Result<bool> {
    let Some(path) = &config.path else {
        return Ok(false);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let installed = tracing::subscriber::set_global_default(file_subscriber(config, file)).is_ok();
    if installed {
        info!(path = %path.display(), "logging initialized");
    }
    Ok(installed)
}
