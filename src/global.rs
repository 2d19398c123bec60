// duolog - global.rs
//
// Process-wide Emitter.
//
// Lifecycle: created with defaults on first use, mutated only through the
// setters below, never torn down. Console style is fixed by the `color`
// cargo feature. Code that wants its own configuration can construct an
// `Emitter` directly instead.

use crate::core::emitter::{Emitter, FileSink};
use crate::core::level::Level;
use crate::core::lock::{LockContext, LockHook};
use crate::core::options::Options;
use crate::core::render::Style;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Emitter> = OnceLock::new();

/// The process-wide Emitter.
pub fn global() -> &'static Emitter {
    GLOBAL.get_or_init(|| Emitter::with_options(Options::default().with_style(Style::from_build())))
}

/// Emit through the process-wide Emitter. Usually reached via the
/// `log_*!` macros, which fill in `file` and `line`.
#[inline]
pub fn log(level: Level, file: &str, line: u32, message: fmt::Arguments<'_>) {
    global().log(level, file, line, message);
}

pub fn set_level(level: Level) {
    global().set_level(level);
}

pub fn set_quiet(quiet: bool) {
    global().set_quiet(quiet);
}

pub fn set_timestamp(enabled: bool) {
    global().set_timestamp(enabled);
}

pub fn set_file_sink(sink: Option<FileSink>) {
    global().set_file_sink(sink);
}

pub fn set_lock_hook(hook: Option<Arc<dyn LockHook>>) {
    global().set_lock_hook(hook);
}

pub fn set_lock_context(context: Option<LockContext>) {
    global().set_lock_context(context);
}
