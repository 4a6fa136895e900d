//! User-facing notifications raised for records that ask for them.

use crate::fmt::{Color, colorize};
use crate::level::Level;

use async_trait::async_trait;
use std::fmt;
use std::io::{self, Write};

/// Label of the follow-up action offered on error notifications.
pub const OPEN_OUTPUT: &str = "Open output";

/// One notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
    /// Selectable follow-up labels, in display order.
    pub actions: Vec<String>,
}

impl Notification {
    /// Error notifications offer to open the output channel; the others offer nothing.
    #[must_use]
    pub fn for_level(level: Level, message: impl Into<String>) -> Self {
        let actions = match level {
            Level::Error => vec![OPEN_OUTPUT.to_string()],
            _ => Vec::new(),
        };

        Self {
            level,
            message: message.into(),
            actions,
        }
    }
}

/// Failure of the presentation mechanism itself.
#[derive(Debug)]
pub enum NotifyError {
    /// The host could not present the notification.
    Presentation(String),
    /// Writing a console notification failed.
    Io(io::Error),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presentation(msg) => f.write_str(msg),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for NotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Presentation(_) => None,
        }
    }
}

impl From<io::Error> for NotifyError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Host notification surface.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Presents the notification and waits for the user.
    ///
    /// Returns the selected action label, or `None` when dismissed.
    ///
    /// # Errors
    /// The presentation mechanism failed.
    async fn notify(&self, notification: &Notification) -> Result<Option<String>, NotifyError>;
}

/// Prints notifications to stderr. There is no way to pick an action, so the
/// result is always a dismissal.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    colors_enabled: bool,
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn format(&self, notification: &Notification) -> String {
        let marker = match notification.level {
            Level::Error => "✖",
            Level::Warn => "▲",
            Level::Info | Level::Debug => "●",
        };
        let marker = if self.colors_enabled {
            colorize(marker, Color::for_level(notification.level))
        } else {
            marker.to_string()
        };

        let actions: String = notification
            .actions
            .iter()
            .map(|action| format!(" [{action}]"))
            .collect();
        format!("{marker} {}{actions}", notification.message)
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notification: &Notification) -> Result<Option<String>, NotifyError> {
        writeln!(io::stderr(), "{}", self.format(notification))?;
        Ok(None)
    }
}
