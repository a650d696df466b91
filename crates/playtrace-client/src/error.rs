use playtrace_types::GameType;
use std::fmt;

/// Result type for playtrace-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// The raw-data fetch for one game failed or returned non-success.
    /// Recoverable: orchestration degrades that game to zero-session
    /// defaults and leaves the others untouched.
    Source { game: GameType, reason: String },

    /// Transport-level HTTP failure
    Http(reqwest::Error),

    /// Extractor/normalizer error
    Extract(playtrace_extractors::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Source { game, reason } => {
                write!(f, "history fetch for '{}' failed: {}", game.tag(), reason)
            }
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Extract(err) => write!(f, "Extractor error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Extract(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Source { .. } | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<playtrace_extractors::Error> for Error {
    fn from(err: playtrace_extractors::Error) -> Self {
        Error::Extract(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
