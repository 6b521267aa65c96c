use super::*;

#[test]
fn memory_marker_starts_absent() {
    let marker = MemoryMarker::new();
    assert_eq!(marker.read(), None);
}

#[test]
fn memory_marker_sets_and_removes() {
    let mut marker = MemoryMarker::new();
    marker.write(Some("dark")).unwrap();
    assert_eq!(marker.value(), Some("dark"));
    marker.write(None).unwrap();
    assert_eq!(marker.value(), None);
}

#[test]
fn memory_marker_with_value_reads_back() {
    let marker = MemoryMarker::with_value("light");
    assert_eq!(marker.read().as_deref(), Some("light"));
}

#[test]
fn root_marker_keeps_attribute_name() {
    let marker = RootElementMarker::new("data-theme");
    assert_eq!(marker.attribute(), "data-theme");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn root_marker_is_noop_outside_browser() {
    let mut marker = RootElementMarker::new("data-theme");
    assert_eq!(marker.write(Some("dark")), Ok(()));
    assert_eq!(marker.read(), None);
}

#[test]
fn failing_marker_rejects_writes_and_keeps_value() {
    let mut marker = MemoryMarker::with_value("light").failing_writes();
    assert!(matches!(marker.write(Some("dark")), Err(MarkerError::Rejected { .. })));
    assert_eq!(marker.value(), Some("light"));
}
