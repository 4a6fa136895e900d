//! The process-wide logger: installed once by [`initialize`], fetched with
//! [`get_instance`], ended with [`end`]. Ending keeps the instance installed
//! in its terminal state, so later logging fails with `LoggerEnded`.

mod hook;

use crate::config::Config;
use crate::internal;
use crate::logger::{Logger, LoggerBuilder};
use std::path::PathBuf;
use std::sync::OnceLock;

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// Binds the process-wide logger to `directory` and the channel identity `name`,
/// using the user config and the default host surfaces.
///
/// # Errors
/// `AlreadyInitialized` on a second call, otherwise anything [`LoggerBuilder::build`] reports.
pub fn initialize(
    directory: impl Into<PathBuf>,
    name: impl Into<String>,
) -> Result<&'static Logger, crate::Error> {
    let config = Config::load().unwrap_or_else(|e| {
        internal::warn("CONFIG", &format!("Falling back to default config: {e}"));
        Config::from_env()
    });
    internal::init_with_config(&config);
    initialize_with(Logger::builder(directory, name).config(config))
}

/// Installs a logger bound to host-provided surfaces.
///
/// # Errors
/// `AlreadyInitialized` on a second call, otherwise anything [`LoggerBuilder::build`] reports.
pub fn initialize_with(builder: LoggerBuilder) -> Result<&'static Logger, crate::Error> {
    if INSTANCE.get().is_some() {
        return Err(crate::Error::AlreadyInitialized);
    }

    let logger = builder.build()?;
    let errors = logger.error_output();
    if INSTANCE.set(logger).is_err() {
        return Err(crate::Error::AlreadyInitialized);
    }
    hook::install(errors);

    let logger = get_instance()?;
    internal::debug(
        "INSTANCE",
        &format!("Logging {} to {}", logger.name(), logger.base_dir().display()),
    );
    Ok(logger)
}

/// # Errors
/// `NotInitialized` before [`initialize`] has succeeded.
pub fn get_instance() -> Result<&'static Logger, crate::Error> {
    INSTANCE.get().ok_or(crate::Error::NotInitialized)
}

/// Ends the process-wide logger. A no-op when nothing was initialized.
///
/// # Errors
/// I/O errors from the final flush of the log files.
pub fn end() -> Result<(), crate::Error> {
    match INSTANCE.get() {
        Some(logger) => logger.end(),
        None => Ok(()),
    }
}
