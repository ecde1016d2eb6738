//! Helpers for generating unique test data
//!
//! Integration tests share one process-wide store per test binary only when
//! they choose to; these helpers keep user ids and seeds distinct anyway so
//! tests stay isolated when they run in parallel.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

static NEXT_USER_ID: AtomicI64 = AtomicI64::new(10_000);
static NEXT_SEED: AtomicU64 = AtomicU64::new(0x5EED_0000);

/// Returns a user id that no other caller in this process has received.
///
/// ```
/// use xeri_test_support::unique_helpers::unique_user_id;
///
/// let a = unique_user_id();
/// let b = unique_user_id();
/// assert_ne!(a, b);
/// ```
pub fn unique_user_id() -> i64 {
    NEXT_USER_ID.fetch_add(1, Ordering::Relaxed)
}

/// Returns a fresh deterministic seed.
pub fn unique_seed() -> u64 {
    NEXT_SEED.fetch_add(1, Ordering::Relaxed)
}

