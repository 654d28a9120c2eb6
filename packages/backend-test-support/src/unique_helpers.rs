//! Test helpers for generating unique test data
//!
//! Unique names keep parallel test runs distinguishable in logs and avoid
//! accidental coupling between cases.

use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique string with the given prefix.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("holder");
/// let b = unique_str("holder");
/// assert_ne!(a, b);
/// assert!(a.starts_with("holder-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, std::process::id(), n)
}
