use super::*;

#[test]
fn slot_claim_is_exclusive_until_dropped() {
    static SLOT: AtomicBool = AtomicBool::new(false);

    let first = SlotClaim::acquire(&SLOT).expect("first claim");
    assert!(SlotClaim::acquire(&SLOT).is_none());

    drop(first);
    assert!(SlotClaim::acquire(&SLOT).is_some());
}

#[test]
fn dropping_handle_releases_slot() {
    static SLOT: AtomicBool = AtomicBool::new(false);

    let handle = ToggleHandle {
        view: Box::new(()),
        _claim: SlotClaim::acquire(&SLOT).expect("claim"),
    };
    assert!(SlotClaim::acquire(&SLOT).is_none());

    handle.unmount();
    assert!(SlotClaim::acquire(&SLOT).is_some());
}

#[test]
fn forgotten_handle_keeps_slot_claimed() {
    static SLOT: AtomicBool = AtomicBool::new(false);

    let handle = ToggleHandle {
        view: Box::new(()),
        _claim: SlotClaim::acquire(&SLOT).expect("claim"),
    };

    handle.forget();
    assert!(SlotClaim::acquire(&SLOT).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn mount_without_browser_reports_missing_document() {
    assert_eq!(mount(ThemeConfig::default()).unwrap_err(), MountError::NoDocument);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn system_theme_is_unknown_without_browser() {
    assert_eq!(system_theme(), None);
}

#[test]
fn mount_rejects_invalid_attribute_before_touching_the_page() {
    let config = ThemeConfig {
        attribute: "data theme".to_owned(),
        ..ThemeConfig::default()
    };
    assert!(matches!(mount(config), Err(MountError::InvalidConfig(_))));
}
