// duolog - lib.rs
//
// Library entry point. A minimal leveled logger: every message passing the
// level gate is written to standard error (unless quiet) and to an optional
// caller-supplied file sink, bracketed by an optional caller-supplied lock
// hook.

pub mod core;
pub mod global;
mod macros;
pub mod util;

pub use crate::core::emitter::{file_sink, Emitter, FileSink};
pub use crate::core::level::Level;
pub use crate::core::lock::{lock_fn, LockContext, LockHook, MutexHook};
pub use crate::core::options::Options;
pub use crate::core::render::Style;
pub use crate::global::{
    global, log, set_file_sink, set_level, set_lock_context, set_lock_hook, set_quiet,
    set_timestamp,
};
