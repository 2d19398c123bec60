// duolog - core/level.rs
//
// Severity levels. Pure data, no I/O.

use crate::util::error::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity of a log message, ordered from least to most severe.
///
/// The discriminant is the ordinal compared by the level gate, so the
/// derived `Ord` is the gating order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Very fine-grained tracing output.
    #[default]
    Trace = 0,
    /// Information useful while debugging.
    Debug = 1,
    /// Normal progress messages.
    Info = 2,
    /// Something unexpected that the program recovered from.
    Warn = 3,
    /// An operation failed.
    Error = 4,
    /// A failure the caller considers unrecoverable. Logging at this level
    /// does not terminate anything; that policy belongs to the caller.
    Fatal = 5,
}

impl Level {
    /// Returns all levels in ascending severity.
    pub fn all() -> &'static [Level] {
        &[
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Fatal,
        ]
    }

    /// Upper-case name as rendered in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// ANSI foreground colour used for the level field in coloured output.
    pub fn ansi_color(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[94m",
            Level::Debug => "\x1b[36m",
            Level::Info => "\x1b[32m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
            Level::Fatal => "\x1b[35m",
        }
    }

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Converts a raw ordinal (0 = TRACE .. 5 = FATAL).
    /// Returns `None` for anything outside that range.
    pub const fn from_ordinal(ordinal: u8) -> Option<Level> {
        match ordinal {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            5 => Some(Level::Fatal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` so width/alignment flags such as `{:<5}` apply.
        f.pad(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive; "warning" is accepted as an alias of WARN.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}
