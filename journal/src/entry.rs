//! Entry type for journal content.

use crate::EntryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single numbered line of journal text.
///
/// The identifier is assigned by an [`EntryCounter`](crate::EntryCounter)
/// at insertion time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Identifier assigned at creation
    pub id: EntryId,
    /// The entry text (may be empty)
    pub text: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(id: EntryId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let entry = Entry::new(3, "went climbing");
        assert_eq!(entry.to_string(), "3: went climbing");
    }

    #[test]
    fn empty_text_is_permitted() {
        let entry = Entry::new(1, "");
        assert_eq!(entry.text, "");
        assert_eq!(entry.to_string(), "1: ");
    }

    #[test]
    fn serialization_roundtrip() {
        let entry = Entry::new(42, "answer recorded");
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }
}
