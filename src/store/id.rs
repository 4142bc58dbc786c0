//! Issues identifiers for records created at runtime.

use std::sync::atomic::{AtomicU64, Ordering};

/// A strictly increasing counter that renders as `id-<n>`.
///
/// The counter is independent of the [DataStore](super::DataStore) lock so
/// that allocating an ID never waits on readers. Seeded records use their own
/// prefixes (`txn-`, `budget-`, ...) so allocated IDs cannot collide with them.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first ID is `id-1`.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Get a new ID that has never been issued before.
    pub fn next(&self) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed);

        format!("id-{id}")
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
