#![forbid(unsafe_code)]

//! Layered application configuration.
//!
//! Values are resolved from three layers, later layers winning:
//!
//! 1. built-in defaults (paths relative to `$HOME`)
//! 2. a TOML file (`$XDG_CONFIG_HOME/quickjournal/config.toml`, or the path
//!    given with `--config`)
//! 3. command-line flags
//!
//! ```toml
//! # ~/.config/quickjournal/config.toml
//! journal_dir = "~/notes/journal"
//! max_chars = 280
//! live_emojis = true
//! ```
//!
//! Each layer is a [`ConfigLayer`] (every field optional); [`Config`] is the
//! resolved result. Unknown keys in the file are rejected.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use qj_core::logging::LogConfig;
use qj_text::{DEFAULT_CHAR_LIMIT, EditorConfig};

use crate::error::{Error, Result};

const APP_DIR: &str = "quickjournal";
const CONFIG_FILE: &str = "config.toml";
const MAX_PADDING: u16 = 8;

/// One configuration layer. Unset fields defer to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub journal_dir: Option<PathBuf>,
    pub emoji_csv: Option<PathBuf>,
    pub max_chars: Option<usize>,
    pub live_emojis: Option<bool>,
    pub private: Option<bool>,
    pub title: Option<String>,
    pub padding: Option<u16>,
    pub suggestion_limit: Option<usize>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl ConfigLayer {
    /// Parse a layer from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(s: &str, origin: &Path) -> Result<Self> {
        toml::from_str(s).map_err(|source| Error::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if the file does not exist, or the
    /// read/parse error.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::MissingConfig {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_toml_str(&text, path)
    }

    /// Overlay `over` on top of `self`.
    #[must_use]
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            journal_dir: over.journal_dir.or(self.journal_dir),
            emoji_csv: over.emoji_csv.or(self.emoji_csv),
            max_chars: over.max_chars.or(self.max_chars),
            live_emojis: over.live_emojis.or(self.live_emojis),
            private: over.private.or(self.private),
            title: over.title.or(self.title),
            padding: over.padding.or(self.padding),
            suggestion_limit: over.suggestion_limit.or(self.suggestion_limit),
            log_file: over.log_file.or(self.log_file),
            log_level: over.log_level.or(self.log_level),
        }
    }
}

/// The process environment the defaults are derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnv {
    pub home: Option<PathBuf>,
    pub config_home: Option<PathBuf>,
}

impl ConfigEnv {
    /// Read `HOME` and `XDG_CONFIG_HOME`.
    #[must_use]
    pub fn from_process() -> Self {
        let non_empty = |key: &str| {
            std::env::var_os(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            home: non_empty("HOME"),
            config_home: non_empty("XDG_CONFIG_HOME"),
        }
    }

    /// Location of the config file when `--config` is not given.
    #[must_use]
    pub fn default_config_path(&self) -> Option<PathBuf> {
        let base = self
            .config_home
            .clone()
            .or_else(|| self.home.as_ref().map(|h| h.join(".config")))?;
        Some(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Expand a leading `~/` against `HOME`.
    fn expand_tilde(&self, path: PathBuf) -> PathBuf {
        if let (Ok(rest), Some(home)) = (path.strip_prefix("~"), &self.home) {
            return home.join(rest);
        }
        path
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the dated journal files.
    pub journal_dir: PathBuf,
    /// Two-column CSV of glyph and shortcode.
    pub emoji_csv: PathBuf,
    /// Character budget per entry.
    pub max_chars: usize,
    /// Expand shortcodes while typing.
    pub live_emojis: bool,
    /// Scramble the displayed text.
    pub private: bool,
    pub title: String,
    /// Blank cells between the border and the text.
    pub padding: u16,
    /// Maximum rows in the suggestion popover; 0 disables it.
    pub suggestion_limit: usize,
    pub log_file: Option<PathBuf>,
    /// Log filter used when `QJ_LOG` is unset.
    pub log_level: String,
}

impl Config {
    /// Resolve a layer against the defaults for `env`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHome`] when a path is unset and there is no
    /// home directory to default it from.
    pub fn resolve(layer: ConfigLayer, env: &ConfigEnv) -> Result<Self> {
        let home_default = |rel: &str| -> Result<PathBuf> {
            env.home
                .as_ref()
                .map(|home| home.join(rel))
                .ok_or(Error::MissingHome)
        };
        let journal_dir = match layer.journal_dir {
            Some(p) => env.expand_tilde(p),
            None => home_default("Documents/Journal")?,
        };
        let emoji_csv = match layer.emoji_csv {
            Some(p) => env.expand_tilde(p),
            None => home_default("Developer/QuickJournal/emoji.csv")?,
        };

        Ok(Self {
            journal_dir,
            emoji_csv,
            max_chars: layer.max_chars.unwrap_or(DEFAULT_CHAR_LIMIT),
            live_emojis: layer.live_emojis.unwrap_or(false),
            private: layer.private.unwrap_or(false),
            title: layer.title.unwrap_or_else(|| "QuickJournal".to_owned()),
            padding: layer.padding.unwrap_or(1),
            suggestion_limit: layer.suggestion_limit.unwrap_or(5),
            log_file: layer.log_file.map(|p| env.expand_tilde(p)),
            log_level: layer.log_level.unwrap_or_else(|| "warn".to_owned()),
        })
    }

    /// Load the file layer (explicit path, else the default location if it
    /// exists), overlay `overrides`, resolve and validate.
    ///
    /// # Errors
    ///
    /// An explicit `path` that does not exist is an error; a missing default
    /// file is not. Parse, resolve and validation errors are returned as-is.
    pub fn load(path: Option<&Path>, overrides: ConfigLayer, env: &ConfigEnv) -> Result<Self> {
        let file_layer = match path {
            Some(path) => ConfigLayer::from_toml_file(path)?,
            None => match env.default_config_path() {
                Some(default) if default.is_file() => ConfigLayer::from_toml_file(&default)?,
                _ => ConfigLayer::default(),
            },
        };
        let config = Self::resolve(file_layer.merge(overrides), env)?;
        config.validate()?;
        debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Check value ranges, collecting every problem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] listing all problems found.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.max_chars == 0 {
            problems.push("max_chars must be greater than 0".to_owned());
        }
        if self.padding > MAX_PADDING {
            problems.push(format!("padding must be at most {MAX_PADDING}"));
        }
        if self.title.contains(['\n', '\r']) {
            problems.push("title must be a single line".to_owned());
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::Config { problems })
        }
    }

    #[must_use]
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig::new(self.max_chars).live_preview(self.live_emojis)
    }

    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            path: self.log_file.clone(),
            default_directive: self.log_level.clone(),
        }
    }
}
