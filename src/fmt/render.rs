//! Turns a record into the lines each sink receives.

use crate::level::Level;
use crate::record::LogRecord;
use chrono::{Local, NaiveDateTime};

/// Canonical second-precision layout shared by both log files and the channel.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separates the message from an error's trace.
pub const TRACE_SEPARATOR: &str = " ";

/// The textual forms of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Message plus trace suffix, without timestamp or tag.
    pub body: String,
    /// `YYYY-MM-DD HH:mm:ss [level] body`, written to both log files.
    pub file_line: String,
    /// What the channel receives: `body` in raw mode, `file_line` otherwise.
    pub channel_line: String,
}

/// Stateless renderer. Reads the clock only in [`Formatter::render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter;

impl Formatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders against the current local time.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> Rendered {
        self.render_at(record, Local::now().naive_local())
    }

    /// Deterministic form of [`Formatter::render`].
    #[must_use]
    pub fn render_at(&self, record: &LogRecord, now: NaiveDateTime) -> Rendered {
        let body = Self::body(record);
        let file_line = Self::line(&now.format(TIMESTAMP_FORMAT).to_string(), record.level, &body);
        let channel_line = if record.ignore_format_for_output_channel {
            body.clone()
        } else {
            file_line.clone()
        };

        Rendered {
            body,
            file_line,
            channel_line,
        }
    }

    /// Prefixes a pre-rendered body with timestamp and tag.
    #[must_use]
    pub fn line(timestamp: &str, level: Level, body: &str) -> String {
        format!("{timestamp} {} {body}", Self::tag(level))
    }

    #[must_use]
    pub fn tag(level: Level) -> String {
        format!("[{level}]")
    }

    fn body(record: &LogRecord) -> String {
        let trace = match record.level {
            Level::Error => record.error.trace_text(),
            _ => None,
        };

        match trace {
            Some(trace) => format!("{}{TRACE_SEPARATOR}{trace}", record.message),
            None => record.message.clone(),
        }
    }
}
