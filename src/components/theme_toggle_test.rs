use super::*;

#[test]
fn dark_view_offers_light_and_is_pressed() {
    let view = ControlView::for_theme(Theme::Dark);
    assert_eq!(view.icon, "☀️");
    assert_eq!(view.tooltip, "Switch to light mode");
    assert!(view.pressed);
    assert_eq!(view.aria_pressed(), "true");
}

#[test]
fn light_view_offers_dark_and_is_not_pressed() {
    let view = ControlView::for_theme(Theme::Light);
    assert_eq!(view.icon, "🌙");
    assert_eq!(view.tooltip, "Switch to dark mode");
    assert!(!view.pressed);
    assert_eq!(view.aria_pressed(), "false");
}

#[test]
fn pressed_state_equals_dark_for_every_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(ControlView::for_theme(theme).pressed, theme == Theme::Dark);
    }
}

#[test]
fn views_differ_after_a_flip() {
    let theme = Theme::Light;
    assert_ne!(ControlView::for_theme(theme), ControlView::for_theme(theme.toggled()));
}

#[test]
fn label_is_stable() {
    assert_eq!(TOGGLE_LABEL, "Toggle theme");
}
