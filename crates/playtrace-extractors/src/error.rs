use playtrace_types::GameType;
use std::fmt;

/// Result type for playtrace-extractors operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the extractor layer
#[derive(Debug)]
pub enum Error {
    /// Extractor invoked with a record of another game type. Callers must
    /// route by game type before invoking; hitting this is a programmer
    /// error, fatal to that call.
    SchemaMismatch { expected: GameType, found: String },

    /// No extractor is registered for the record's game type. Recoverable;
    /// callers treat the game as zero-data.
    UnknownGameType(String),

    /// Malformed record (missing envelope fields, unparseable timestamp).
    Parse(String),

    /// JSON decoding failed
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SchemaMismatch { expected, found } => write!(
                f,
                "extractor for '{}' received a '{}' record",
                expected.tag(),
                found
            ),
            Error::UnknownGameType(tag) => write!(f, "no extractor registered for '{}'", tag),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::SchemaMismatch { .. } | Error::UnknownGameType(_) | Error::Parse(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
