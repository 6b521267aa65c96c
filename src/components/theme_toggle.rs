//! Floating button that flips between light and dark themes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once per page by `mount`. The button only reflects the theme
//! signal; the click callback is where the controller flips and persists.

use leptos::prelude::*;

use crate::theme::Theme;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Accessible name of the control, independent of the current theme.
pub const TOGGLE_LABEL: &str = "Toggle theme";

/// Everything the button shows for a given theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlView {
    pub icon: &'static str,
    pub tooltip: &'static str,
    /// `aria-pressed`: the control is "on" while dark is active.
    pub pressed: bool,
}

impl ControlView {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            icon: theme.toggle_icon(),
            tooltip: theme.toggle_tooltip(),
            pressed: theme.is_dark(),
        }
    }

    pub fn aria_pressed(self) -> &'static str {
        if self.pressed { "true" } else { "false" }
    }
}

/// Theme toggle button.
#[component]
pub fn ThemeToggle(
    theme: RwSignal<Theme>,
    #[prop(into)] control_id: String,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let control = move || ControlView::for_theme(theme.get());

    view! {
        <button
            id=control_id
            class="theme-toggle"
            type="button"
            aria-label=TOGGLE_LABEL
            aria-pressed=move || control().aria_pressed()
            title=move || control().tooltip
            on:click=move |_| on_toggle.run(())
        >
            {move || control().icon}
        </button>
    }
}
