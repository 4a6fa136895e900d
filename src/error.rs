//! Unified error type for all chanlog operations.

/// Error type for chanlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a file sink, directory creation, or runtime setup.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Invalid log directory or channel name.
    InvalidPath(String),
    /// A record was dispatched without any message text.
    EmptyMessage,
    /// `get_instance` was called before `initialize`.
    NotInitialized,
    /// `initialize` was called while an instance is already installed.
    AlreadyInitialized,
    /// The logger was ended; no further records are accepted.
    LoggerEnded,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
            Self::EmptyMessage => write!(f, "log message must not be empty"),
            Self::NotInitialized => write!(f, "logger not initialized"),
            Self::AlreadyInitialized => write!(f, "logger already initialized"),
            Self::LoggerEnded => write!(f, "logger ended"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
