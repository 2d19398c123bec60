// duolog - core/options.rs
//
// Construction-time configuration for an Emitter. Defaults come from
// util::constants. The crate never loads this from a file or the
// environment itself; `Deserialize` lets the embedding application fill it
// from whatever configuration source it already owns.

use crate::core::level::Level;
use crate::core::render::Style;
use crate::util::constants;
use serde::Deserialize;

/// Initial settings of an Emitter.
///
/// Unknown keys are ignored and missing keys fall back to defaults, so a
/// `[logging]` table in a host application's config can be deserialised
/// straight into this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Messages below this level are dropped.
    pub level: Level,
    /// Suppress the console sink.
    pub quiet: bool,
    /// Render timestamps.
    pub timestamp: bool,
    /// Console presentation. Fixed for the lifetime of the Emitter.
    pub style: Style,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            level: constants::DEFAULT_LEVEL,
            quiet: constants::DEFAULT_QUIET,
            timestamp: constants::DEFAULT_TIMESTAMP,
            style: Style::Plain,
        }
    }
}

impl Options {
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
