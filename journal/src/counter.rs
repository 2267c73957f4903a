//! Sequence generator for entry identifiers.
//!
//! Numbering is an explicit collaborator rather than hidden global state.
//! A store owns its own counter by default; stores that should share one
//! numbering sequence are constructed from clones of the same counter.

use crate::EntryId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A monotonically increasing source of entry identifiers.
///
/// `Clone` yields a handle to the *same* sequence: every store built from
/// clones of one counter draws from one numbering space. Increments are
/// atomic, so identifiers stay unique even when handles are spread across
/// threads.
///
/// Identifiers start at 1 and are never reused within the lifetime of the
/// counter. Uniqueness is not persisted across processes.
#[derive(Debug, Clone, Default)]
pub struct EntryCounter {
    issued: Arc<AtomicU64>,
}

impl EntryCounter {
    /// Create a new counter. The first identifier it issues is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier.
    pub fn next(&self) -> EntryId {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of identifiers issued so far (0 if none).
    pub fn last_issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}
