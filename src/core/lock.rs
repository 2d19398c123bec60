// duolog - core/lock.rs
//
// Externally supplied synchronisation. The Emitter owns no lock of its own
// around emission; it brackets each non-gated call with
// `hook.lock(ctx, true)` / `hook.lock(ctx, false)`. The release is tied to
// scope exit so it also runs when a sink panics.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, PoisonError};

/// Opaque value handed to the lock hook on every call.
pub type LockContext = Arc<dyn Any + Send + Sync>;

/// A capability that serialises log calls.
///
/// `acquire == true` must block until the caller holds exclusive access;
/// `acquire == false` gives it up. Multi-threaded embeddings back this with
/// a real mutual-exclusion primitive (see [`MutexHook`]); single-threaded
/// ones can install nothing at all.
pub trait LockHook: Send + Sync {
    fn lock(&self, context: Option<&LockContext>, acquire: bool);
}

/// Adapts a closure into a [`LockHook`].
pub struct LockFn<F>(F);

impl<F> LockHook for LockFn<F>
where
    F: Fn(Option<&LockContext>, bool) + Send + Sync,
{
    fn lock(&self, context: Option<&LockContext>, acquire: bool) {
        (self.0)(context, acquire)
    }
}

impl<F> fmt::Debug for LockFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LockFn(..)")
    }
}

/// Wrap a callback `(context, acquire)` as a shareable hook.
pub fn lock_fn<F>(f: F) -> Arc<dyn LockHook>
where
    F: Fn(Option<&LockContext>, bool) + Send + Sync + 'static,
{
    Arc::new(LockFn(f))
}

// =============================================================================
// MutexHook
// =============================================================================

/// Ready-made hook providing real mutual exclusion across threads.
///
/// Unlike a `MutexGuard`, the held state survives between the separate
/// acquire and release calls. The context is ignored.
#[derive(Debug, Default)]
pub struct MutexHook {
    held: Mutex<bool>,
    released: Condvar,
}

impl MutexHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some caller currently holds the hook.
    pub fn is_held(&self) -> bool {
        *self.held.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LockHook for MutexHook {
    fn lock(&self, _context: Option<&LockContext>, acquire: bool) {
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        if acquire {
            while *held {
                held = self
                    .released
                    .wait(held)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            *held = true;
        } else {
            *held = false;
            drop(held);
            self.released.notify_one();
        }
    }
}

// =============================================================================
// Scope guard
// =============================================================================

/// Holds the hook for the duration of one emission.
///
/// Hook and context are read once, before acquiring; the same pair is used
/// for the release even if the Emitter is reconfigured meanwhile.
pub(crate) struct LockScope {
    hook: Option<Arc<dyn LockHook>>,
    context: Option<LockContext>,
}

impl LockScope {
    pub(crate) fn enter(hook: Option<Arc<dyn LockHook>>, context: Option<LockContext>) -> Self {
        if let Some(hook) = &hook {
            hook.lock(context.as_ref(), true);
        }
        Self { hook, context }
    }
}

impl Drop for LockScope {
    fn drop(&mut self) {
        if let Some(hook) = &self.hook {
            hook.lock(self.context.as_ref(), false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_scope_releases_on_drop() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let hook = lock_fn(move |_, acquire| sink.lock().unwrap().push(acquire));

        {
            let _scope = LockScope::enter(Some(hook), None);
            assert_eq!(*calls.lock().unwrap(), vec![true]);
        }
        assert_eq!(*calls.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_scope_releases_on_panic() {
        let hook = Arc::new(MutexHook::new());
        let shared: Arc<dyn LockHook> = hook.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = LockScope::enter(Some(shared), None);
            panic!("sink exploded");
        }));
        assert!(result.is_err());
        assert!(!hook.is_held());
    }

    #[test]
    fn test_context_is_passed_through() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let hook = lock_fn(move |ctx, _| {
            if let Some(value) = ctx.and_then(|c| c.downcast_ref::<usize>()) {
                counter.fetch_add(*value, Ordering::SeqCst);
            }
        });
        let context: LockContext = Arc::new(21usize);
        drop(LockScope::enter(Some(hook), Some(context)));
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[test]
    fn test_no_hook_is_a_no_op() {
        drop(LockScope::enter(None, None));
    }

    #[test]
    fn test_mutex_hook_excludes() {
        let hook = Arc::new(MutexHook::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let max_inside = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let hook = Arc::clone(&hook);
                let inside = Arc::clone(&inside);
                let max_inside = Arc::clone(&max_inside);
                thread::spawn(move || {
                    for _ in 0..200 {
                        hook.lock(None, true);
                        let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                        max_inside.fetch_max(now, Ordering::SeqCst);
                        inside.fetch_sub(1, Ordering::SeqCst);
                        hook.lock(None, false);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
        assert!(!hook.is_held());
    }
}
