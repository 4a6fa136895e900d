//! Severity levels that decide which sinks a record reaches.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the dispatcher can compare a record's level against sink thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// File-only diagnostics. Never shown in the channel or raised as a notification.
    Debug = 0,
    /// Normal operational milestones.
    #[default]
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warn = 2,
    /// Failures. Also duplicated into `error.log`.
    Error = 3,
}

impl Level {
    /// Lowercase because the rendered `[level]` tag and config files use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Convenience for iteration in help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
    }

    /// Channel and notifier only see info and above.
    #[must_use]
    pub const fn is_user_visible(self) -> bool {
        !matches!(self, Self::Debug)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
