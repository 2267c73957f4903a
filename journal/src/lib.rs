//! # Solid Journal
//!
//! A journal of numbered text entries with a separated persistence layer.
//!
//! This crate is a worked example of the Single Responsibility Principle:
//! [`EntryStore`] manages entries and nothing else, while [`Persistence`]
//! owns the serialization format. Either side can change (or be tested)
//! without touching the other.
//!
//! ## Design Principles
//!
//! - **Explicit numbering**: identifiers come from an [`EntryCounter`]
//!   owned by the store, never from hidden global state. Stores that
//!   should share one numbering sequence are built from clones of the
//!   same counter.
//! - **Surfaced failures**: every write returns a [`Result`]; nothing is
//!   silently discarded.
//! - **Separated concerns**: the store renders one fixed format; anything
//!   configurable lives behind [`Persistence`] and its writer seam.
//!
//! ## Quick Start
//!
//! ```rust
//! use solid_journal::{EntryStore, Persistence, PersistenceConfig};
//!
//! let mut journal = EntryStore::new();
//! journal.add_entry("I learnt the S.R.P. today!");
//! journal.add_entry("Looking forward to tomorrow...");
//!
//! assert_eq!(
//!     journal.render(),
//!     "1: I learnt the S.R.P. today!\n2: Looking forward to tomorrow..."
//! );
//!
//! // Persistence owns the output format; here it writes to a buffer.
//! let persistence = Persistence::new(PersistenceConfig::new(" | "));
//! let mut out = Vec::new();
//! persistence.save_to_writer(&journal, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains(" | "));
//! ```
//!
//! ## Shared numbering
//!
//! ```rust
//! use solid_journal::{EntryCounter, EntryStore};
//!
//! let counter = EntryCounter::new();
//! let mut diary = EntryStore::with_counter(counter.clone());
//! let mut log = EntryStore::with_counter(counter);
//!
//! assert_eq!(diary.add_entry("dear diary"), 1);
//! assert_eq!(log.add_entry("system started"), 2);
//! ```

pub mod counter;
pub mod entry;
pub mod error;
pub mod persist;
pub mod store;

// Re-export main types at crate root
pub use counter::EntryCounter;
pub use entry::Entry;
pub use error::{Error, Result};
pub use persist::{EntrySource, Persistence, PersistenceConfig};
pub use store::EntryStore;

/// Identifier assigned to an entry at creation.
pub type EntryId = u64;
