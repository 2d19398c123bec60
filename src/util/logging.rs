// duolog - util/logging.rs
//
// Internal diagnostics for the front end. The library reports its own
// conditions (sink write failures, reconfiguration) through `tracing`; this
// module installs a subscriber so they become visible.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//
// Output: stderr, the same stream as the console sink. Diagnostics are kept
// at `warn` by default so they do not mix with emitted log lines.

use tracing_subscriber::EnvFilter;

/// Initialise the diagnostics subscriber.
///
/// Priority: RUST_LOG env var > --debug flag > default "warn".
/// Safe to call more than once; later calls are ignored.
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(super::constants::DEFAULT_DIAGNOSTIC_LEVEL)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Diagnostics initialised"
    );
}
