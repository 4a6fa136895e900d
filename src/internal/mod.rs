//! Chanlog's own diagnostic output (file opens, follow-up failures, panic-hook
//! installation), written to the terminal and never to the log files it manages.
//!
//! Uses `OnceLock` so the diagnostics sink is set up exactly once, even if
//! the CLI and library initialization both try.

use crate::config::Config;
use crate::level::Level;
use crate::output::ConsoleOutput;
use std::sync::OnceLock;

struct Diagnostics {
    min_level: Level,
    console: ConsoleOutput,
}

static DIAGNOSTICS: OnceLock<Diagnostics> = OnceLock::new();

/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init_with_config(config: &Config) {
    let was_init = DIAGNOSTICS.get().is_some();
    DIAGNOSTICS.get_or_init(|| Diagnostics {
        min_level: config.parse_internal_level(),
        console: ConsoleOutput::new().colors(config.console.colors),
    });
    if !was_init {
        debug("INTERNAL", &format!("Environment: {}", config.general.environment));
        debug("INTERNAL", "Internal diagnostics ready");
    }
}

/// Calls made before init are dropped.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(diagnostics) = DIAGNOSTICS.get()
        && level >= diagnostics.min_level
    {
        let _ = diagnostics.console.write_scoped(level, scope, msg);
    }
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
