//! EntryStore - the in-memory entry container.
//!
//! The store holds entries in insertion order and assigns identifiers
//! through an [`EntryCounter`]. It knows how to render itself as text and
//! how to write that text to a file; anything beyond the default rendering
//! belongs to the persistence layer.

use crate::{error::Result, Entry, EntryCounter, EntryId, Error};
use std::fmt;
use std::fs;
use std::path::Path;

/// An ordered sequence of numbered entries.
///
/// A store created with [`EntryStore::new`] numbers its entries privately.
/// To share one numbering sequence across several stores, construct each of
/// them with [`EntryStore::with_counter`] from clones of the same
/// [`EntryCounter`]. Cloning a store clones its entries and keeps sharing
/// the id sequence.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    counter: EntryCounter,
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Create an empty store with its own private counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store drawing identifiers from `counter`.
    pub fn with_counter(counter: EntryCounter) -> Self {
        Self {
            counter,
            entries: Vec::new(),
        }
    }

    /// Get the counter this store draws identifiers from.
    pub fn counter(&self) -> &EntryCounter {
        &self.counter
    }

    /// Append a new entry and return its identifier.
    ///
    /// Empty text is permitted.
    pub fn add_entry(&mut self, text: impl Into<String>) -> EntryId {
        let id = self.counter.next();
        self.entries.push(Entry::new(id, text));
        id
    }

    /// Remove the entry at `index` and return it.
    ///
    /// Surviving entries keep their identifiers; gaps in the numbering are
    /// permanent and removed identifiers are never reused. An out-of-range
    /// index is an error, not a panic.
    pub fn remove_entry(&mut self, index: usize) -> Result<Entry> {
        if index >= self.entries.len() {
            return Err(Error::EntryNotFound(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Get the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all entries as newline-joined `"<id>: <text>"` lines.
    ///
    /// Read-only; for a configurable separator use
    /// [`Persistence`](crate::Persistence).
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the rendered entries to `path` as UTF-8 text, overwriting any
    /// existing file.
    ///
    /// Write failures are surfaced as [`Error::WriteFailed`], never
    /// silently discarded.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|source| Error::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), entries = self.len(), "journal saved");
        Ok(())
    }
}

impl fmt::Display for EntryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
