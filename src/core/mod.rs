// duolog - core/mod.rs
//
// The logging facility: levels, rendering, timestamps, the lock hook seam
// and the Emitter pipeline that ties them together.

pub mod emitter;
pub mod level;
pub mod lock;
pub mod options;
pub mod render;
pub mod stamp;
