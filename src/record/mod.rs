//! One logical log event as the caller describes it, before rendering.

mod payload;

pub use payload::ErrorPayload;

use crate::level::Level;

/// Carries everything the dispatcher needs to route one event. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// Only consulted for error-level records.
    pub error: ErrorPayload,
    /// Raise a user-facing notification. Ignored for debug records.
    pub notify_user: bool,
    /// The channel gets the bare message instead of the timestamped line.
    pub ignore_format_for_output_channel: bool,
}

impl LogRecord {
    /// Starts an info-level record; the level wrappers on `Logger` override it.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn error(mut self, payload: impl Into<ErrorPayload>) -> Self {
        self.error = payload.into();
        self
    }

    #[must_use]
    pub const fn notify_user(mut self, notify: bool) -> Self {
        self.notify_user = notify;
        self
    }

    #[must_use]
    pub const fn ignore_format_for_output_channel(mut self, ignore: bool) -> Self {
        self.ignore_format_for_output_channel = ignore;
        self
    }

    /// Debug records never notify, whatever the flag says.
    #[must_use]
    pub const fn wants_notification(&self) -> bool {
        self.notify_user && self.level.is_user_visible()
    }
}

impl From<&str> for LogRecord {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for LogRecord {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
