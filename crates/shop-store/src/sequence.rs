//! # Id Sequences
//!
//! One atomically incremented counter per entity kind.
//!
//! ```text
//! next() ──► fetch_add(1) ──► 0, 1, 2, ...   (never reused)
//! ```
//!
//! The repositories call `next()` while holding their table's write lock,
//! so the table's key order is also the creation order.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    /// A sequence whose first value is 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the next value.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
