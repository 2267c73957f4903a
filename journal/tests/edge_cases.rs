//! Edge case tests for solid-journal
//!
//! These tests cover boundary conditions and unusual inputs.

use solid_journal::{EntryCounter, EntryStore, Error, Persistence};

// ============================================================================
// Text Edge Cases
// ============================================================================

#[test]
fn empty_entry_text() {
    let mut store = EntryStore::new();
    let id = store.add_entry("");

    assert_eq!(id, 1);
    assert_eq!(store.render(), "1: ");
}

#[test]
fn unicode_entry_text() {
    let unicode_texts = vec![
        "日本語テスト",      // Japanese
        "Привет мир",        // Russian
        "مرحبا بالعالم",     // Arabic
        "🎉🚀💯",            // Emoji
        "Ω≈ç√∫",             // Math symbols
        "tab\tseparated",    // Whitespace
    ];

    let mut store = EntryStore::new();
    for text in &unicode_texts {
        store.add_entry(*text);
    }

    assert_eq!(store.len(), unicode_texts.len());
    for (entry, text) in store.iter().zip(&unicode_texts) {
        assert_eq!(entry.text, *text);
    }
}

#[test]
fn entry_text_containing_the_separator() {
    let mut store = EntryStore::new();
    store.add_entry("before | after");
    store.add_entry("plain");

    // the store renders it untouched; a caller choosing " | " as separator
    // accepts the ambiguity
    let persistence = Persistence::with_separator(" | ");
    assert_eq!(
        persistence.render(&store),
        "1: before | after | 2: plain"
    );
}

// ============================================================================
// Numbering Edge Cases
// ============================================================================

#[test]
fn ids_stay_unique_across_threads() {
    let counter = EntryCounter::new();
    let mut handles = Vec::new();

    for t in 0..4 {
        let counter = counter.clone();
        handles.push(std::thread::spawn(move || {
            let mut store = EntryStore::with_counter(counter);
            for i in 0..100 {
                store.add_entry(format!("thread {t} entry {i}"));
            }
            store.iter().map(|e| e.id).collect::<Vec<_>>()
        }));
    }

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(total, 400);
    assert_eq!(ids.len(), 400);
}

#[test]
fn removal_then_addition_never_reuses_ids() {
    let mut store = EntryStore::new();
    for i in 0..5 {
        store.add_entry(format!("entry {i}"));
    }

    store.remove_entry(0).unwrap();
    store.remove_entry(0).unwrap();
    assert_eq!(store.add_entry("after removals"), 6);

    let ids: Vec<_> = store.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 4, 5, 6]);
}

#[test]
fn remove_from_empty_store() {
    let mut store = EntryStore::new();
    assert!(matches!(store.remove_entry(0), Err(Error::EntryNotFound(0))));
}

// ============================================================================
// Persistence Edge Cases
// ============================================================================

#[test]
fn roundtrip_with_default_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.txt");

    let mut store = EntryStore::new();
    store.add_entry("one");
    store.add_entry("two");
    store.add_entry("three");

    Persistence::default().save_to_file(&store, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.split('\n').collect();
    assert_eq!(lines, vec!["1: one", "2: two", "3: three"]);
}

#[test]
fn roundtrip_with_multichar_separator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.txt");

    let mut store = EntryStore::new();
    store.add_entry("one");
    store.add_entry("two");

    Persistence::with_separator(" :: ")
        .save_to_file(&store, &path)
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parts: Vec<&str> = contents.split(" :: ").collect();
    assert_eq!(parts, vec!["1: one", "2: two"]);
}

#[test]
fn store_save_and_persistence_default_agree() {
    let dir = tempfile::tempdir().unwrap();
    let via_store = dir.path().join("store.txt");
    let via_persistence = dir.path().join("persistence.txt");

    let mut store = EntryStore::new();
    store.add_entry("same either way");
    store.add_entry("down to the byte");

    store.save(&via_store).unwrap();
    Persistence::default()
        .save_to_file(&store, &via_persistence)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&via_store).unwrap(),
        std::fs::read_to_string(&via_persistence).unwrap()
    );
}

#[test]
fn saving_an_empty_store_writes_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.txt");

    EntryStore::new().save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}
