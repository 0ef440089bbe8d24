use super::*;

#[test]
fn new_store_is_empty() {
    let store = EntryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

// =============================================================
// add
// =============================================================

#[test]
fn add_trims_whitespace() {
    let mut store = EntryStore::new();
    assert_eq!(store.add("  Alice  "), Some(0));
    assert_eq!(store.get(0), Some("Alice"));
}

#[test]
fn add_empty_is_noop() {
    let mut store = EntryStore::new();
    assert_eq!(store.add(""), None);
    assert_eq!(store.len(), 0);
}

#[test]
fn add_whitespace_only_is_noop() {
    let mut store: EntryStore = ["A"].into_iter().collect();
    assert_eq!(store.add(" \t\n "), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn add_appends_in_order() {
    let mut store = EntryStore::new();
    store.add("one");
    store.add("two");
    assert_eq!(store.add("three"), Some(2));
    assert_eq!(store.as_slice(), ["one", "two", "three"]);
}

#[test]
fn add_keeps_duplicates_and_case() {
    let mut store = EntryStore::new();
    store.add("Bob");
    store.add("bob");
    store.add("Bob");
    assert_eq!(store.as_slice(), ["Bob", "bob", "Bob"]);
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_shifts_later_entries() {
    let mut store: EntryStore = ["A", "B", "C", "D"].into_iter().collect();
    assert_eq!(store.remove(2).as_deref(), Some("C"));
    assert_eq!(store.as_slice(), ["A", "B", "D"]);
}

#[test]
fn remove_out_of_range_is_noop() {
    let mut store: EntryStore = ["A", "B"].into_iter().collect();
    assert_eq!(store.remove(2), None);
    assert_eq!(store.remove(usize::MAX), None);
    assert_eq!(store.as_slice(), ["A", "B"]);
}

#[test]
fn remove_from_empty_is_noop() {
    let mut store = EntryStore::new();
    assert_eq!(store.remove(0), None);
}

#[test]
fn remove_only_first_duplicate_position() {
    let mut store: EntryStore = ["X", "X"].into_iter().collect();
    store.remove(0);
    assert_eq!(store.as_slice(), ["X"]);
}

#[test]
fn from_iter_skips_blank_labels() {
    let store: EntryStore = ["a", "", "  ", " b"].into_iter().collect();
    assert_eq!(store.as_slice(), ["a", "b"]);
}
