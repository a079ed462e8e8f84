//! Scoped environment variable overrides for tests.
//!
//! Callers must be marked `#[serial]`: the process environment is shared by
//! every test thread.

#![allow(dead_code)]

/// Set `key` to `value` while `f` runs, then restore the previous value.
pub fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: callers are serialized with #[serial]
    unsafe { std::env::set_var(key, value) };

    let result = f();

    restore(key, original);
    result
}

/// Remove `key` while `f` runs, then restore the previous value.
pub fn without_env_var<F, R>(key: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: callers are serialized with #[serial]
    unsafe { std::env::remove_var(key) };

    let result = f();

    restore(key, original);
    result
}

fn restore(key: &str, original: Option<String>) {
    // SAFETY: callers are serialized with #[serial]
    match original {
        Some(v) => unsafe { std::env::set_var(key, v) },
        None => unsafe { std::env::remove_var(key) },
    }
}
