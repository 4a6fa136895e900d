//! TOML configuration loading and environment overrides.
//!
//! Separated from struct definitions so that the loading logic (file I/O,
//! environment lookup) stays independent of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, GeneralConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides `general.environment`.
pub const ENV_VAR: &str = "CHANLOG_ENV";

const PRODUCTION: &str = "production";

/// Every field has a serde default, so an empty file yields a working config.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
}

impl Config {
    /// Loads the user config (defaults when absent) and applies `CHANLOG_ENV`.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Ok(Self::load_from(&path)?.with_env())
    }

    /// Loads configuration from an explicit path. No environment overrides are applied.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Defaults plus environment overrides; used when no config file is wanted.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup, so callers aren't tied to the process environment.
    #[must_use]
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(environment) = lookup(ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.general.environment = environment.trim().to_string();
        }
        self
    }

    /// `~/.config/chanlog/chanlog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "chanlog")
            .map(|dirs| dirs.config_dir().join("chanlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.general.environment.eq_ignore_ascii_case(PRODUCTION)
    }

    /// Whether records are echoed to the console.
    #[must_use]
    pub fn echo_to_console(&self) -> bool {
        self.console.enabled && !self.is_production()
    }

    #[must_use]
    pub fn parse_internal_level(&self) -> Level {
        self.general.internal_level.parse().unwrap_or(Level::Warn)
    }

    /// `log_dir` with `~` expanded.
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.general.log_dir).as_ref())
    }
}
