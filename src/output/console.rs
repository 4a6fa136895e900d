//! Human-readable echo to the terminal: the non-production copy of every
//! record and the crate's own diagnostics.

use crate::fmt::{Color, Formatter};
use crate::level::Level;

use std::io::{self, Write};

/// Terminal writer. Warn and error go to stderr, the rest to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOutput {
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

    /// `[level]: body`, the simplified record layout without timestamp.
    #[must_use]
    pub fn format_record(&self, level: Level, body: &str) -> String {
        format!("{}: {body}", self.tag(level))
    }

    /// `[level] SCOPE  msg`, used for internal diagnostics.
    #[must_use]
    pub fn format_scoped(&self, level: Level, scope: &str, msg: &str) -> String {
        let scope = if self.colors_enabled {
            format!("\x1b[2m{scope}\x1b[0m")
        } else {
            scope.to_string()
        };
        format!("{} {scope}  {msg}", self.tag(level))
    }

    /// # Errors
    /// I/O errors from stdout/stderr.
    pub fn write_record(&self, level: Level, body: &str) -> Result<(), crate::Error> {
        Self::emit(level, &self.format_record(level, body))
    }

    /// # Errors
    /// I/O errors from stdout/stderr.
    pub fn write_scoped(&self, level: Level, scope: &str, msg: &str) -> Result<(), crate::Error> {
        Self::emit(level, &self.format_scoped(level, scope, msg))
    }

    /// # Errors
    /// I/O errors from stdout/stderr.
    pub fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }

    fn tag(&self, level: Level) -> String {
        let tag = Formatter::tag(level);
        if self.colors_enabled {
            format!("{}{tag}{}", Color::for_level(level).fg_ansi(), Color::RESET)
        } else {
            tag
        }
    }

    fn emit(level: Level, line: &str) -> Result<(), crate::Error> {
        if level >= Level::Warn {
            writeln!(io::stderr(), "{line}")?;
        } else {
            writeln!(io::stdout(), "{line}")?;
        }
        Ok(())
    }
}
