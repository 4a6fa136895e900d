//! `chanlog` - one logging call surface for log files, an output channel, and
//! user notifications.
//!
//! Every record goes to `<dir>/<name>.log`. Error records are duplicated into
//! `<dir>/error.log`. Info and above are appended to the output channel, and a
//! record that asks for it raises a notification in the background; error
//! notifications offer to open the channel.
//!
//! # Example
//!
//! ```no_run
//! use chanlog::{ErrorPayload, LogRecord};
//!
//! # fn main() -> Result<(), chanlog::Error> {
//! chanlog::initialize("/tmp/logs", "App")?;
//!
//! let logger = chanlog::get_instance()?;
//! logger.info("Extension activated")?;
//! logger.warn(LogRecord::new("Config is deprecated").notify_user(true))?;
//! logger.error(LogRecord::new("Build failed").error(ErrorPayload::trace("at build.rs:12")))?;
//!
//! chanlog::end()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `chanlog` command-line binary

pub mod config;
mod error;
pub mod fmt;
mod instance;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{Formatter, Rendered};
pub use instance::{end, get_instance, initialize, initialize_with};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{
    Channel, ConsoleNotifier, MemoryChannel, MockNotifier, Notification, Notifier, NotifyError,
};
pub use record::{ErrorPayload, LogRecord};
