//! # Synchronization Utilities
//!
//! The color types themselves hold no shared state. The only lock in the
//! crate guards the output writer of [`crate::logging::ColorLogger`].
//!
//! ## Poison Handling
//!
//! A mutex becomes poisoned when a thread panics while holding it. A logger
//! must keep working after an unrelated panic elsewhere, so every lock is
//! taken through [`lock_recover`], which recovers the guard instead of
//! propagating the poison. Tests may still use `.lock().unwrap()` to fail fast.

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use colorhub::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
