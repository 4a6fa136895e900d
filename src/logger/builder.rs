//! Binds a logger to its directory, channel identity and host surfaces.

use super::follow_up::Pending;
use super::{ERROR_LOG_FILE, Logger, Shared};
use crate::config::Config;
use crate::fmt::Formatter;
use crate::internal;
use crate::output::{
    Channel, ConsoleNotifier, ConsoleOutput, FileOutput, MemoryChannel, Notifier,
};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

/// Host surfaces default to an in-process [`MemoryChannel`] and a [`ConsoleNotifier`].
pub struct LoggerBuilder {
    base_dir: PathBuf,
    name: String,
    channel: Option<Box<dyn Channel>>,
    notifier: Option<Arc<dyn Notifier>>,
    config: Option<Config>,
}

impl LoggerBuilder {
    pub(super) const fn new(base_dir: PathBuf, name: String) -> Self {
        Self {
            base_dir,
            name,
            channel: None,
            notifier: None,
            config: None,
        }
    }

    /// Host channel surface. Its identity should match the logger name.
    #[must_use]
    pub fn channel(mut self, channel: impl Channel + 'static) -> Self {
        self.channel = Some(Box::new(channel));
        self
    }

    /// Host notification surface.
    #[must_use]
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    /// Without this the defaults plus `CHANLOG_ENV` apply.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Creates the directory if needed, opens both log files and starts the
    /// notification worker.
    ///
    /// # Errors
    /// `InvalidPath` for a name that is empty, contains a path separator, or
    /// would collide with `error.log`; I/O errors creating the directory, the
    /// files, or the worker thread.
    pub fn build(self) -> Result<Logger, crate::Error> {
        validate_name(&self.name)?;
        let config = self.config.unwrap_or_else(Config::from_env);

        fs::create_dir_all(&self.base_dir)?;
        internal::debug(
            "LOGGER",
            &format!("Log directory ready: {}", self.base_dir.display()),
        );

        let channel = self
            .channel
            .unwrap_or_else(|| Box::new(MemoryChannel::new(&self.name)));
        let notifier = self.notifier.unwrap_or_else(|| {
            Arc::new(ConsoleNotifier::new().colors(config.console.colors))
        });
        let general = FileOutput::open(self.base_dir.join(format!("{}.log", self.name)))?;
        let errors = Arc::new(FileOutput::open(self.base_dir.join(ERROR_LOG_FILE))?);
        let console = config
            .echo_to_console()
            .then(|| ConsoleOutput::new().colors(config.console.colors));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("chanlog-notify")
            .build()?;

        internal::debug("LOGGER", &format!("Logger {} ready", self.name));

        Ok(Logger {
            shared: Arc::new(Shared {
                name: self.name,
                base_dir: self.base_dir,
                formatter: Formatter::new(),
                general,
                errors,
                channel,
                notifier,
                console,
                ended: AtomicBool::new(false),
                order: Mutex::new(()),
                pending: Pending::default(),
            }),
            runtime: Some(runtime),
        })
    }
}

fn validate_name(name: &str) -> Result<(), crate::Error> {
    if name.trim().is_empty() {
        return Err(crate::Error::InvalidPath("logger name is empty".to_string()));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(crate::Error::InvalidPath(format!(
            "logger name is not a plain file name: {name}"
        )));
    }
    if format!("{name}.log") == ERROR_LOG_FILE {
        return Err(crate::Error::InvalidPath(format!(
            "logger name collides with {ERROR_LOG_FILE}: {name}"
        )));
    }
    Ok(())
}
