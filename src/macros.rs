// duolog - macros.rs
//
// Call-site macros. Each captures `file!()` and `line!()` and hands the
// message to the Emitter as `format_args!`, so nothing is formatted when
// the level gate drops the call.

/// Log through an explicit Emitter.
///
/// ```
/// let emitter = duolog::Emitter::new();
/// emitter.set_quiet(true);
/// duolog::log_at!(emitter, duolog::Level::Info, "listening on {}", 8080);
/// ```
#[macro_export]
macro_rules! log_at {
    ($emitter:expr, $lvl:expr, $($arg:tt)+) => {
        $emitter.log($lvl, file!(), line!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => { $crate::global::log($crate::Level::Trace, file!(), line!(), format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => { $crate::global::log($crate::Level::Debug, file!(), line!(), format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => { $crate::global::log($crate::Level::Info, file!(), line!(), format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => { $crate::global::log($crate::Level::Warn, file!(), line!(), format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => { $crate::global::log($crate::Level::Error, file!(), line!(), format_args!($($arg)+)) };
}

/// Logs at FATAL. Does not exit or panic.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => { $crate::global::log($crate::Level::Fatal, file!(), line!(), format_args!($($arg)+)) };
}
