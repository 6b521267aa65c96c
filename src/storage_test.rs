use super::*;

#[test]
fn memory_store_round_trips_value() {
    let mut store = MemoryStore::new();
    assert_eq!(store.try_get("theme"), Ok(None));
    store.try_set("theme", "dark").unwrap();
    assert_eq!(store.try_get("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(store.write_attempts(), 1);
}

#[test]
fn memory_store_with_entry_is_seeded() {
    let store = MemoryStore::with_entry("theme", "light");
    assert_eq!(store.peek("theme"), Some("light"));
    assert_eq!(store.peek("other"), None);
}

#[test]
fn failing_reads_report_unavailable() {
    let store = MemoryStore::with_entry("theme", "dark").failing_reads();
    assert!(matches!(store.try_get("theme"), Err(StorageError::Unavailable { .. })));
}

#[test]
fn failing_writes_leave_entries_untouched() {
    let mut store = MemoryStore::with_entry("theme", "light").failing_writes();
    assert!(store.try_set("theme", "dark").is_err());
    assert_eq!(store.peek("theme"), Some("light"));
    assert_eq!(store.write_attempts(), 1);
}

#[test]
fn unavailable_store_fails_both_ways() {
    let mut store = MemoryStore::unavailable();
    assert!(store.try_get("theme").is_err());
    assert!(store.try_set("theme", "dark").is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_unavailable_outside_browser() {
    let mut store = LocalStore;
    assert!(store.try_get("theme").is_err());
    assert!(store.try_set("theme", "dark").is_err());
}

#[test]
fn storage_error_message_includes_reason() {
    let err = StorageError::unavailable("quota exceeded");
    assert_eq!(err.to_string(), "storage unavailable: quota exceeded");
}
