//! Helpers for silencing the process panic hook in tests.
//!
//! Panics captured by `microtry::apply` still run the panic hook, which
//! prints to stderr. The hook is process-global, so this module serialises
//! access behind a mutex and restores the previous hook on drop, following
//! the same RAII pattern as [`crate::env`].
//!
//! # Examples
//!
//! ```
//! use microtry_test_helpers::panic_hook;
//!
//! let _quiet = panic_hook::silence();
//! let outcome = microtry::apply(|| -> u8 { panic!("expected") });
//! assert!(outcome.is_error());
//! ```

use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::panic::{self, PanicHookInfo};
use std::sync::LazyLock;

static HOOK_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

type Hook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// RAII guard that restores the previous panic hook on drop.
#[must_use = "dropping restores the previous panic hook"]
pub struct SilencedHook {
    original: Option<Hook>,
    _lock: MutexGuard<'static, ()>,
}

impl fmt::Debug for SilencedHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SilencedHook")
            .field("has_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for SilencedHook {
    fn drop(&mut self) {
        // The hook cannot be swapped while unwinding; leave it silenced.
        if std::thread::panicking() {
            return;
        }
        if let Some(original) = self.original.take() {
            panic::set_hook(original);
        }
    }
}

/// Replaces the panic hook with a no-op until the guard is dropped.
///
/// The global `HOOK_MUTEX` is held for the lifetime of the guard so that two
/// tests never interleave their hook swaps.
pub fn silence() -> SilencedHook {
    let lock = HOOK_MUTEX.lock();
    let original = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    SilencedHook {
        original: Some(original),
        _lock: lock,
    }
}
