//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Runtime mode. Anything other than `production` echoes records to the console.
    pub environment: String,
    /// Minimum level for chanlog's own diagnostics.
    pub internal_level: String,
    /// Default log directory for the CLI (`~` is expanded).
    pub log_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        let log_dir = directories::ProjectDirs::from("", "", "chanlog").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            environment: "development".to_string(),
            internal_level: "warn".to_string(),
            log_dir,
        }
    }
}

/// Console echo configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Echo records outside production.
    pub enabled: bool,
    /// Enable colors.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
        }
    }
}
