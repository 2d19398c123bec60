// duolog - core/emitter.rs
//
// The emission pipeline:
//   level gate -> lock hook acquire -> timestamp -> console line -> file line
//   -> lock hook release
//
// Configuration fields are stored individually (atomics and small locks),
// each read once per call. A call racing with setters can therefore see a
// mix of old and new values across fields; it never sees a torn field.
//
// Sink failures are never surfaced to the caller. They are reported as
// `tracing` warnings once the lock hook and the sink have been released, and
// the call returns normally.

use crate::core::level::Level;
use crate::core::lock::{LockContext, LockHook, LockScope};
use crate::core::options::Options;
use crate::core::render::{render_line, Location, Style};
use crate::core::stamp::Stamp;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Caller-supplied persistent sink.
///
/// Shared rather than owned: the caller keeps its own clone of the handle,
/// and replacing or clearing the sink only drops the Emitter's clone. The
/// underlying file is closed when the last handle goes away, never by the
/// Emitter on its own.
pub type FileSink = Arc<Mutex<dyn Write + Send>>;

/// Wrap an open writer as a [`FileSink`].
pub fn file_sink<W: Write + Send + 'static>(writer: W) -> FileSink {
    Arc::new(Mutex::new(writer))
}

/// Where console lines go. Always standard error outside of unit tests.
enum Console {
    Stderr,
    #[cfg(test)]
    Capture(tests::SharedBuf),
}

impl Console {
    fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Console::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes())?;
                err.flush()
            }
            #[cfg(test)]
            Console::Capture(buf) => buf.clone().write_all(line.as_bytes()),
        }
    }
}

/// Leveled logger writing to standard error and an optional file sink.
pub struct Emitter {
    level: AtomicU8,
    quiet: AtomicBool,
    timestamp: AtomicBool,
    style: Style,
    console: Console,
    file: RwLock<Option<FileSink>>,
    hook: RwLock<Option<Arc<dyn LockHook>>>,
    context: RwLock<Option<LockContext>>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("level", &self.level())
            .field("quiet", &self.is_quiet())
            .field("timestamp", &self.timestamp_enabled())
            .field("style", &self.style)
            .field("file_sink", &self.has_file_sink())
            .field("lock_hook", &self.has_lock_hook())
            .finish()
    }
}

impl Emitter {
    /// Emitter with default options and plain console output.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self::build(options, Console::Stderr)
    }

    fn build(options: Options, console: Console) -> Self {
        Self {
            level: AtomicU8::new(options.level.ordinal()),
            quiet: AtomicBool::new(options.quiet),
            timestamp: AtomicBool::new(options.timestamp),
            style: options.style,
            console,
            file: RwLock::new(None),
            hook: RwLock::new(None),
            context: RwLock::new(None),
        }
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    pub fn set_level(&self, level: Level) {
        self.level.store(level.ordinal(), Ordering::Relaxed);
        tracing::debug!(%level, "Minimum level set");
    }

    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
        tracing::debug!(quiet, "Console quiet flag set");
    }

    pub fn set_timestamp(&self, enabled: bool) {
        self.timestamp.store(enabled, Ordering::Relaxed);
        tracing::debug!(enabled, "Timestamp rendering set");
    }

    /// Install, replace or clear (`None`) the file sink.
    ///
    /// The Emitter never opens or closes files; the caller hands over an
    /// already open writer and keeps its own handle to it. An in-flight write
    /// to the previous sink finishes on that sink.
    pub fn set_file_sink(&self, sink: Option<FileSink>) {
        let installed = sink.is_some();
        *self.file.write().unwrap_or_else(PoisonError::into_inner) = sink;
        tracing::debug!(installed, "File sink set");
    }

    /// Install or remove (`None`) the lock hook.
    ///
    /// Not itself synchronised by the hook: swap hooks only while no other
    /// thread is logging.
    pub fn set_lock_hook(&self, hook: Option<Arc<dyn LockHook>>) {
        let installed = hook.is_some();
        *self.hook.write().unwrap_or_else(PoisonError::into_inner) = hook;
        tracing::debug!(installed, "Lock hook set");
    }

    /// Value passed to the lock hook on every call.
    pub fn set_lock_context(&self, context: Option<LockContext>) {
        *self.context.write().unwrap_or_else(PoisonError::into_inner) = context;
    }

    // -------------------------------------------------------------------------
    // Getters
    // -------------------------------------------------------------------------

    pub fn level(&self) -> Level {
        // Only `set_level` writes this field, always from a Level.
        Level::from_ordinal(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    pub fn timestamp_enabled(&self) -> bool {
        self.timestamp.load(Ordering::Relaxed)
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn has_file_sink(&self) -> bool {
        self.file
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn has_lock_hook(&self) -> bool {
        self.hook
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Whether a message at `level` would pass the level gate.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.ordinal() >= self.level.load(Ordering::Relaxed)
    }

    // -------------------------------------------------------------------------
    // Emission
    // -------------------------------------------------------------------------

    /// Emit one message.
    ///
    /// Below the threshold this is a single comparison: no lock hook call,
    /// no clock read, no formatting. Never fails observably and never
    /// terminates the process, FATAL included.
    pub fn log(&self, level: Level, file: &str, line: u32, message: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let (console_err, file_err) = self.write_sinks(level, Location::new(file, line), message);

        if let Some(e) = console_err {
            tracing::warn!(error = %e, "Console sink write failed");
        }
        if let Some(e) = file_err {
            tracing::warn!(error = %e, "File sink write failed");
        }
    }

    /// Write one line to each active sink inside the lock hook's critical
    /// section. Returns the write errors, if any, for reporting after the
    /// hook has been released.
    fn write_sinks(
        &self,
        level: Level,
        location: Location<'_>,
        message: fmt::Arguments<'_>,
    ) -> (Option<io::Error>, Option<io::Error>) {
        let hook = self
            .hook
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let context = self
            .context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let _scope = LockScope::enter(hook, context);

        let stamp = Stamp::capture(self.timestamp_enabled());

        let console_err = if self.is_quiet() {
            None
        } else {
            let rendered = render_line(self.style, stamp.short(), level, location, message);
            self.console.write_line(&rendered).err()
        };

        let sink = self
            .file
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let file_err = sink.and_then(|sink| {
            let rendered = render_line(Style::Plain, stamp.long(), level, location, message);
            let mut writer = sink.lock().unwrap_or_else(PoisonError::into_inner);
            let written = writer
                .write_all(rendered.as_bytes())
                .and_then(|()| writer.flush());
            written.err()
        });

        (console_err, file_err)
    }
}
