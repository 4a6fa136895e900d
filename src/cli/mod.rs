//! Command-line front end: dispatch one record through the process-wide logger.
//!
//! Useful from shell scripts and for checking a log directory by hand.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::record::{ErrorPayload, LogRecord};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// How long the CLI waits for a raised notification before ending.
const NOTIFY_GRACE: Duration = Duration::from_secs(5);

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// chanlog - Write one record to the log files and output channel.
#[derive(Debug, Parser)]
#[command(name = "chanlog", version, about = "Write one record to the log files and output channel")]
pub struct Cli {
    /// Log directory (defaults to `general.log_dir` from the config)
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Channel name; records go to `<dir>/<name>.log`
    #[arg(long, default_value = "chanlog")]
    pub name: String,
    /// Log level
    #[arg(value_enum)]
    pub level: LogLevel,
    /// Log message
    #[arg(required = true)]
    pub message: Vec<String>,
    /// Trace text appended to error records
    #[arg(long)]
    pub trace: Option<String>,
    /// Raise a user notification
    #[arg(long)]
    pub notify: bool,
    /// Write the bare message to the channel
    #[arg(long)]
    pub raw: bool,
}

impl Cli {
    /// The record this invocation describes.
    #[must_use]
    pub fn record(&self) -> LogRecord {
        let mut record = LogRecord::new(self.message.join(" "))
            .level(self.level.into())
            .notify_user(self.notify)
            .ignore_format_for_output_channel(self.raw);
        if let Some(trace) = &self.trace {
            record = record.error(ErrorPayload::trace(trace.as_str()));
        }
        record
    }
}

/// Runs one invocation against the process-wide logger.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let dir = cli.dir.clone().unwrap_or_else(|| {
        Config::load()
            .unwrap_or_else(|_| Config::from_env())
            .log_dir()
    });

    let result = crate::initialize(&dir, cli.name.as_str()).and_then(|logger| {
        logger.log(cli.record())?;
        if !logger.wait_idle(NOTIFY_GRACE) {
            internal::warn("CLI", "Notification still pending at exit");
        }
        crate::end()
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("chanlog: {e}");
            ExitCode::FAILURE
        }
    }
}
