// duolog - util/error.rs
//
// Typed errors for the parts of the crate that can fail. The emission path
// itself has no caller-visible failure mode and never produces these.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for duolog operations.
#[derive(Debug)]
pub enum DuologError {
    /// A severity name could not be parsed.
    Level(ParseLevelError),

    /// A sink could not be prepared by the front end.
    Sink(SinkError),
}

impl fmt::Display for DuologError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(e) => write!(f, "Level error: {e}"),
            Self::Sink(e) => write!(f, "Sink error: {e}"),
        }
    }
}

impl std::error::Error for DuologError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Level(e) => Some(e),
            Self::Sink(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Level errors
// ---------------------------------------------------------------------------

/// A string did not name one of the six severities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a log level. Valid values: trace, debug, info, warn, error, fatal",
            self.input
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for DuologError {
    fn from(e: ParseLevelError) -> Self {
        Self::Level(e)
    }
}

// ---------------------------------------------------------------------------
// Sink errors
// ---------------------------------------------------------------------------

/// Errors raised while preparing a file sink.
#[derive(Debug)]
pub enum SinkError {
    /// The log file could not be opened for appending.
    Open { path: PathBuf, source: io::Error },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Cannot open log file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
        }
    }
}

impl From<SinkError> for DuologError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

/// Convenience type alias for duolog results.
pub type Result<T> = std::result::Result<T, DuologError>;
