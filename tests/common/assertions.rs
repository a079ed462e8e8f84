//! Logged assertion helpers for colorhub tests.
//!
//! These wrap standard assertions with tracing logs so a failing comparison
//! shows both sides in CI output.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );

    tracing::trace!(context = context, "assertion passed");
}

/// Assert that two floats differ by at most `tolerance`.
#[track_caller]
pub fn assert_close_logged(context: &str, actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    tracing::debug!(
        context = context,
        expected = expected,
        actual = actual,
        diff = diff,
        tolerance = tolerance,
        "asserting closeness"
    );

    if diff > tolerance {
        tracing::error!(
            context = context,
            expected = expected,
            actual = actual,
            diff = diff,
            "assertion failed: values too far apart"
        );
    }

    assert!(
        diff <= tolerance,
        "{context}: expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Assert that every component of a triple is within `tolerance`.
#[track_caller]
pub fn assert_triple_close_logged(
    context: &str,
    actual: (f64, f64, f64),
    expected: (f64, f64, f64),
    tolerance: f64,
) {
    assert_close_logged(&format!("{context} [0]"), actual.0, expected.0, tolerance);
    assert_close_logged(&format!("{context} [1]"), actual.1, expected.1, tolerance);
    assert_close_logged(&format!("{context} [2]"), actual.2, expected.2, tolerance);
}

/// Assert that a Result is Ok with logging.
///
/// Returns the Ok value for further assertions.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context = context, result = ?result, "asserting Ok");

    match result {
        Ok(value) => {
            tracing::trace!(context = context, value = ?value, "assertion passed: got Ok");
            value
        }
        Err(ref e) => {
            tracing::error!(context = context, error = ?e, "assertion failed: expected Ok, got Err");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Assert that a Result is Err with logging.
///
/// Returns the Err value for further assertions.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context = context, result = ?result, "asserting Err");

    match result {
        Err(e) => {
            tracing::trace!(context = context, error = ?e, "assertion passed: got Err");
            e
        }
        Ok(ref value) => {
            tracing::error!(
                context = context,
                value = ?value,
                "assertion failed: expected Err, got Ok"
            );
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}

/// Assert that a string contains a substring with logging.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(
        context = context,
        needle = needle,
        haystack_len = haystack.len(),
        "asserting contains"
    );

    assert!(
        haystack.contains(needle),
        "{context}: expected {haystack:?} to contain {needle:?}"
    );
}
