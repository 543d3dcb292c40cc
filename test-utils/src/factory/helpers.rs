use std::sync::atomic::{AtomicI32, Ordering};

static NEXT_ID: AtomicI32 = AtomicI32::new(1);

/// Returns a process-wide unique counter value.
///
/// Used by factories to generate unique names, emails, slugs, and SKUs so that
/// multiple factory calls within one test never violate unique constraints.
pub fn next_id() -> i32 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
