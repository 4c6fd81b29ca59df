#![forbid(unsafe_code)]

//! Command-line entry: flags, configuration, and one editing session.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use qj_core::logging;
use qj_core::terminal_session::TerminalSession;
use qj_runtime::{
    Config, ConfigEnv, ConfigLayer, FileSink, JournalApp, Program, ProgramConfig, Result,
    SessionOutcome, load_dictionary,
};

#[derive(Debug, Default, Parser)]
#[command(
    name = "quickjournal",
    about = "QuickJournal -- rapid and micro journaling.",
    version
)]
pub struct Cli {
    /// Enable live-emojis preview.
    #[arg(long)]
    pub live_emojis: bool,

    /// Maximum number of characters to input.
    #[arg(long, value_name = "N")]
    pub max_chars: Option<usize>,

    /// Scramble the live text for privacy.
    #[arg(long)]
    pub private: bool,

    /// Directory for the dated journal files.
    #[arg(long, value_name = "DIR")]
    pub journal_dir: Option<PathBuf>,

    /// Emoji dictionary CSV (glyph,shortcode).
    #[arg(long, value_name = "FILE")]
    pub emoji_csv: Option<PathBuf>,

    /// Append diagnostics to this file (filter with QJ_LOG).
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The flags as the top configuration layer. Switches only override
    /// when given.
    #[must_use]
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            journal_dir: self.journal_dir.clone(),
            emoji_csv: self.emoji_csv.clone(),
            max_chars: self.max_chars,
            live_emojis: self.live_emojis.then_some(true),
            private: self.private.then_some(true),
            log_file: self.log_file.clone(),
            ..ConfigLayer::default()
        }
    }

    /// Resolve the full configuration for this invocation.
    ///
    /// # Errors
    ///
    /// Returns config file, resolution and validation errors.
    pub fn config(&self, env: &ConfigEnv) -> Result<Config> {
        Config::load(self.config.as_deref(), self.layer(), env)
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.config(&ConfigEnv::from_process())?;
    logging::init(&config.log_config())?;

    let dict = load_dictionary(&config.emoji_csv)?;
    let sink = FileSink::new(&config.journal_dir);
    let app = JournalApp::new(&config, dict, Box::new(sink))?;

    let program_config = ProgramConfig::default();
    let session = TerminalSession::new(program_config.session_options())?;
    let app = Program::new(app, session, std::io::stdout(), program_config)?.run()?;

    match app.finish()? {
        SessionOutcome::Saved(entry) => {
            info!(chars = entry.text.chars().count(), "session finished with entry");
        }
        SessionOutcome::Discarded => info!("session finished without entry"),
    }
    Ok(())
}

/// Print a failed entry so it is not lost with the terminal.
pub fn report_unsaved(out: &mut impl Write, text: &str) -> std::io::Result<()> {
    writeln!(out, "unsaved entry:")?;
    for line in text.split('\n') {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}
