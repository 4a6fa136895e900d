//! Failure details attached to error-level records.

use std::backtrace::{Backtrace, BacktraceStatus};

/// What the caller knows about the failure behind an error record.
///
/// The formatter matches on the variant. Only `WithTrace` contributes text to
/// the rendered line; `Opaque` and `Absent` render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorPayload {
    /// A failure with textual detail (call stack, cause chain).
    WithTrace(String),
    /// A failure value that carries nothing printable.
    Opaque,
    /// No failure value was supplied.
    #[default]
    Absent,
}

impl ErrorPayload {
    #[must_use]
    pub fn trace(text: impl Into<String>) -> Self {
        Self::WithTrace(text.into())
    }

    /// Renders the error and every `source()` below it, one cause per line.
    #[must_use]
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut text = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            text.push_str("\n    caused by: ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::WithTrace(text)
    }

    /// Disabled or unsupported backtraces have nothing to show.
    #[must_use]
    pub fn from_backtrace(backtrace: &Backtrace) -> Self {
        match backtrace.status() {
            BacktraceStatus::Captured => Self::WithTrace(backtrace.to_string()),
            _ => Self::Opaque,
        }
    }

    /// The trace text, if there is any worth appending.
    #[must_use]
    pub fn trace_text(&self) -> Option<&str> {
        match self {
            Self::WithTrace(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<String> for ErrorPayload {
    fn from(text: String) -> Self {
        Self::WithTrace(text)
    }
}

impl From<&str> for ErrorPayload {
    fn from(text: &str) -> Self {
        Self::WithTrace(text.to_string())
    }
}

impl From<&crate::Error> for ErrorPayload {
    fn from(err: &crate::Error) -> Self {
        Self::from_error(err)
    }
}

impl From<&std::io::Error> for ErrorPayload {
    fn from(err: &std::io::Error) -> Self {
        Self::from_error(err)
    }
}
