//! Persistence - serialization split from entry management.
//!
//! [`EntryStore`] knows one fixed rendering; how entries end up on durable
//! storage is a separate concern. [`Persistence`] owns the output format
//! (currently just the separator) and can target any [`std::io::Write`],
//! which keeps it testable without touching the filesystem.

use crate::{error::Result, Entry, EntryStore, Error};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Configuration for journal serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceConfig {
    /// Separator placed between entries in the output
    pub separator: String,
}

impl PersistenceConfig {
    /// Create a config with the given separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self::new("\n")
    }
}

/// Writes a store's entries to durable storage.
#[derive(Debug, Clone, Default)]
pub struct Persistence {
    config: PersistenceConfig,
}

impl Persistence {
    /// Create a persistence helper with the given configuration.
    pub fn new(config: PersistenceConfig) -> Self {
        Self { config }
    }

    /// Create a persistence helper joining entries with `separator`.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self::new(PersistenceConfig::new(separator))
    }

    /// Get the configuration.
    pub fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    /// Render the store's entries joined by the configured separator.
    pub fn render(&self, store: &EntryStore) -> String {
        store
            .iter()
            .map(Entry::to_string)
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }

    /// Write the rendered entries to an arbitrary writer.
    ///
    /// This is the seam for substituting an in-memory writer in tests.
    pub fn save_to_writer<W: Write>(
        &self,
        store: &EntryStore,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writer.write_all(self.render(store).as_bytes())
    }

    /// Write the rendered entries to `path` as UTF-8 text, overwriting any
    /// existing file.
    ///
    /// Write failures are surfaced as [`Error::WriteFailed`].
    pub fn save_to_file(&self, store: &EntryStore, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        File::create(path)
            .and_then(|mut file| self.save_to_writer(store, &mut file))
            .map_err(|source| Error::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            entries = store.len(),
            separator = ?self.config.separator,
            "journal persisted"
        );
        Ok(())
    }
}

/// Contract for collaborators that populate a store from elsewhere.
///
/// File and web loaders are the expected implementors; none are shipped
/// yet. Implementations append entries through
/// [`EntryStore::add_entry`] so identifiers stay consistent, and report
/// unreachable sources as [`Error::SourceUnavailable`].
pub trait EntrySource {
    /// Populate `store` with entries from this source.
    fn load_into(&self, store: &mut EntryStore) -> Result<()>;
}
