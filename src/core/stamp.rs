// duolog - core/stamp.rs
//
// One wall-clock capture per log call, rendered in two granularities:
// HH:MM:SS for the console and YYYY-MM-DD HH:MM:SS for the file. Both
// forms come from the same instant so the sinks agree on the moment.

use crate::util::constants::{TIMESTAMP_FORMAT_LONG, TIMESTAMP_FORMAT_SHORT};
use chrono::{DateTime, Local};
use std::fmt;

/// The instant captured for a single log call, or nothing when timestamps
/// are disabled.
#[derive(Debug, Clone, Copy)]
pub struct Stamp(Option<DateTime<Local>>);

impl Stamp {
    /// Capture the current local time if `enabled`.
    pub fn capture(enabled: bool) -> Self {
        if enabled {
            Self(Some(Local::now()))
        } else {
            Self(None)
        }
    }

    /// Stamp for a fixed instant.
    pub fn at(instant: DateTime<Local>) -> Self {
        Self(Some(instant))
    }

    /// Console form, `HH:MM:SS`.
    pub fn short(&self) -> StampField<'_> {
        StampField {
            stamp: self,
            format: TIMESTAMP_FORMAT_SHORT,
        }
    }

    /// File form, `YYYY-MM-DD HH:MM:SS`.
    pub fn long(&self) -> StampField<'_> {
        StampField {
            stamp: self,
            format: TIMESTAMP_FORMAT_LONG,
        }
    }
}

/// Lazily formatted view of a [`Stamp`]; zero-width when disabled.
#[derive(Debug, Clone, Copy)]
pub struct StampField<'a> {
    stamp: &'a Stamp,
    format: &'static str,
}

impl fmt::Display for StampField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stamp.0 {
            Some(instant) => write!(f, "{}", instant.format(self.format)),
            None => Ok(()),
        }
    }
}
