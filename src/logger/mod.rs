//! The dispatcher: classifies each record by level, renders it once, and fans
//! the lines out to the general file, the error file, the channel, the console
//! echo and, when asked, a user notification.
//!
//! Sink handles are fixed at build time; the only mutable state is the
//! terminal flag and the count of outstanding notification follow-ups.
//! Dispatches are serialized as a whole, so every sink sees records in the
//! same order.

mod builder;
mod follow_up;

pub use builder::LoggerBuilder;

use crate::fmt::Formatter;
use crate::internal;
use crate::level::Level;
use crate::output::{Channel, ConsoleOutput, FileOutput, Notification, Notifier};
use crate::record::LogRecord;
use follow_up::{FollowUp, Pending};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Name of the error-only file inside the log directory.
pub const ERROR_LOG_FILE: &str = "error.log";

/// Who issued a dispatch. Only caller records may raise notifications, which
/// caps notification-failure re-entry at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Caller,
    NotificationFailure,
}

/// State shared between the caller-facing `Logger` and its follow-up tasks.
struct Shared {
    name: String,
    base_dir: PathBuf,
    formatter: Formatter,
    general: FileOutput,
    errors: Arc<FileOutput>,
    channel: Box<dyn Channel>,
    notifier: Arc<dyn Notifier>,
    console: Option<ConsoleOutput>,
    ended: AtomicBool,
    /// Held from the ended check through the last sink write.
    order: Mutex<()>,
    pending: Pending,
}

impl Shared {
    fn is_ended(&self) -> bool {
        self.ended.load(Ordering::Acquire)
    }

    fn lock_order(&self) -> MutexGuard<'_, ()> {
        self.order.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the synchronous part of a dispatch and returns the notification to raise, if any.
    fn dispatch(
        &self,
        record: &LogRecord,
        origin: Origin,
    ) -> Result<Option<Notification>, crate::Error> {
        let _order = self.lock_order();
        if self.is_ended() {
            return Err(crate::Error::LoggerEnded);
        }
        if record.message.is_empty() {
            return Err(crate::Error::EmptyMessage);
        }

        let rendered = self.formatter.render(record);

        self.general.append(&rendered.file_line)?;
        if record.level == Level::Error {
            self.errors.append(&rendered.file_line)?;
        }
        if record.level.is_user_visible() {
            self.channel.append_line(&rendered.channel_line)?;
        }
        if let Some(console) = &self.console {
            let _ = console.write_record(record.level, &rendered.body);
        }

        let notify = origin == Origin::Caller && record.wants_notification();
        Ok(notify.then(|| Notification::for_level(record.level, &record.message)))
    }
}

/// Routes records to every sink. Build one with [`Logger::builder`], or use the
/// process-wide instance from [`crate::initialize`].
pub struct Logger {
    shared: Arc<Shared>,
    /// Runs notification waits. Taken on drop.
    runtime: Option<Runtime>,
}

impl Logger {
    /// Logger writing `<base_dir>/<name>.log` and `<base_dir>/error.log`.
    #[must_use]
    pub fn builder(base_dir: impl Into<PathBuf>, name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(base_dir.into(), name.into())
    }

    /// Dispatches a record at the level it carries.
    ///
    /// Returns once every synchronous sink has been written; a requested
    /// notification is raised in the background.
    ///
    /// # Errors
    /// `LoggerEnded` after [`Logger::end`], `EmptyMessage` for a blank message,
    /// and I/O errors from the file sinks.
    pub fn log(&self, record: impl Into<LogRecord>) -> Result<(), crate::Error> {
        let record = record.into();
        if let Some(notification) = self.shared.dispatch(&record, Origin::Caller)? {
            self.spawn_follow_up(notification);
        }
        Ok(())
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn debug(&self, record: impl Into<LogRecord>) -> Result<(), crate::Error> {
        self.log(record.into().level(Level::Debug))
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn info(&self, record: impl Into<LogRecord>) -> Result<(), crate::Error> {
        self.log(record.into().level(Level::Info))
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn warn(&self, record: impl Into<LogRecord>) -> Result<(), crate::Error> {
        self.log(record.into().level(Level::Warn))
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn error(&self, record: impl Into<LogRecord>) -> Result<(), crate::Error> {
        self.log(record.into().level(Level::Error))
    }

    /// Reveals the output channel.
    pub fn show_output_channel(&self, preserve_focus: bool) {
        self.shared.channel.show(preserve_focus);
    }

    /// Clears the channel's visible content. Log files are untouched.
    pub fn clear(&self) {
        self.shared.channel.clear();
    }

    /// Enters the terminal state: closes both files and disposes the channel.
    /// Calling it again does nothing.
    ///
    /// # Errors
    /// I/O errors from the final flush of either file. The logger is ended regardless.
    pub fn end(&self) -> Result<(), crate::Error> {
        let _order = self.shared.lock_order();
        if self.shared.ended.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        internal::debug("LOGGER", &format!("Ending logger {}", self.shared.name));

        let general = self.shared.general.close();
        let errors = self.shared.errors.close();
        self.shared.channel.dispose();
        if let Some(console) = &self.shared.console {
            let _ = console.flush();
        }

        general.and(errors)
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.shared.is_ended()
    }

    /// Channel identity the logger was bound to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.shared.base_dir
    }

    #[must_use]
    pub fn log_path(&self) -> &Path {
        self.shared.general.path()
    }

    #[must_use]
    pub fn error_log_path(&self) -> &Path {
        self.shared.errors.path()
    }

    /// Notifications still waiting on the user (or on their follow-up).
    #[must_use]
    pub fn pending_notifications(&self) -> usize {
        self.shared.pending.count()
    }

    /// Blocks until every outstanding follow-up has finished or `timeout` passes.
    /// Returns `false` on timeout. Do not call from inside an async task.
    #[must_use]
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        self.shared.pending.wait_idle(timeout)
    }

    /// The error-only writer, shared with the panic hook.
    pub(crate) fn error_output(&self) -> Arc<FileOutput> {
        Arc::clone(&self.shared.errors)
    }

    fn spawn_follow_up(&self, notification: Notification) {
        let Some(runtime) = &self.runtime else {
            return;
        };
        let follow_up = FollowUp::new(Arc::clone(&self.shared), notification);
        runtime.spawn(follow_up.run());
    }
}

impl Drop for Logger {
    /// Outstanding notification waits are abandoned, not awaited.
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
