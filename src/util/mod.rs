// duolog - util/mod.rs
//
// Utility modules: error types, named constants, diagnostics setup.
// No dependencies on the emitter beyond the Level type.

pub mod constants;
pub mod error;
pub mod logging;
