// duolog - util/constants.rs
//
// Single source of truth for named constants and defaults.

use crate::core::level::Level;

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "duolog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Emitter defaults
// =============================================================================

/// Threshold a fresh Emitter starts with: everything passes.
pub const DEFAULT_LEVEL: Level = Level::Trace;

/// Console output is enabled by default.
pub const DEFAULT_QUIET: bool = false;

/// Timestamps are rendered by default.
pub const DEFAULT_TIMESTAMP: bool = true;

// =============================================================================
// Line format
// =============================================================================

/// Width the level name is left-aligned into ("INFO " / "ERROR").
pub const LEVEL_FIELD_WIDTH: usize = 5;

/// chrono format of the console timestamp.
pub const TIMESTAMP_FORMAT_SHORT: &str = "%H:%M:%S";

/// chrono format of the file timestamp.
pub const TIMESTAMP_FORMAT_LONG: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// ANSI escapes
// =============================================================================

/// Resets all attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Dim gray used for the `file:line:` segment.
pub const ANSI_LOCATION: &str = "\x1b[90m";

// =============================================================================
// Internal diagnostics
// =============================================================================

/// Filter used for the binary's own tracing output when neither RUST_LOG
/// nor --debug is given.
pub const DEFAULT_DIAGNOSTIC_LEVEL: &str = "warn";
