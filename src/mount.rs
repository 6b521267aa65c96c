//! Mounting the toggle into the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mount` wires a browser-backed controller to a `ThemeToggle` appended to
//! `<body>` and returns a handle that unmounts it on drop. At most one toggle
//! may be live per page: a second `mount` fails instead of duplicating the
//! control. `start` is the wasm entry point a page calls once on load.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::ThemeConfig;
use crate::error::MountError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

static TOGGLE_SLOT: AtomicBool = AtomicBool::new(false);

/// Exclusive claim on a single-instance slot, released on drop.
#[derive(Debug)]
pub struct SlotClaim {
    slot: &'static AtomicBool,
}

impl SlotClaim {
    /// Claim `slot`, or `None` if another claim is live.
    pub fn acquire(slot: &'static AtomicBool) -> Option<Self> {
        slot.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { slot })
    }
}

impl Drop for SlotClaim {
    fn drop(&mut self) {
        self.slot.store(false, Ordering::Release);
    }
}

/// Live toggle control. Dropping it removes the button and frees the slot.
#[derive(Debug)]
pub struct ToggleHandle {
    // Declared before `_claim` so the view is torn down first.
    view: Box<dyn Any>,
    _claim: SlotClaim,
}

impl ToggleHandle {
    /// Remove the control from the page.
    pub fn unmount(self) {
        drop(self);
    }

    /// Keep the control mounted for the rest of the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// `prefers-color-scheme` as reported by the browser.
pub fn system_theme() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(if query.matches() { Theme::Dark } else { Theme::Light })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Resolve the theme, mark the document, and append the toggle to `<body>`.
pub fn mount(config: ThemeConfig) -> Result<ToggleHandle, MountError> {
    config
        .validate()
        .map_err(|e| MountError::InvalidConfig(e.to_string()))?;

    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        use crate::components::theme_toggle::ThemeToggle;
        use crate::controller::ThemePreferenceController;
        use crate::marker::RootElementMarker;
        use crate::storage::LocalStore;

        let claim = SlotClaim::acquire(&TOGGLE_SLOT).ok_or(MountError::AlreadyMounted)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(MountError::NoDocument)?;
        if document.get_element_by_id(&config.control_id).is_some() {
            return Err(MountError::AlreadyMounted);
        }
        let body = document.body().ok_or(MountError::NoBody)?;

        let hint = if config.follow_system { system_theme() } else { None };
        let control_id = config.control_id.clone();
        let marker = RootElementMarker::new(config.attribute.clone());
        let mut controller = ThemePreferenceController::new(config, LocalStore, marker).with_system_hint(hint);
        let initial = controller.initialize().theme;

        let view = leptos::mount::mount_to(body, move || {
            let theme = RwSignal::new(initial);
            let controller = StoredValue::new(controller);
            let on_toggle = Callback::new(move |()| {
                if let Some(next) = controller.try_update_value(|c| c.toggle().theme) {
                    theme.set(next);
                }
            });
            view! { <ThemeToggle theme=theme control_id=control_id on_toggle=on_toggle/> }
        });

        Ok(ToggleHandle {
            view: Box::new(view),
            _claim: claim,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, &TOGGLE_SLOT);
        Err(MountError::NoDocument)
    }
}

/// Wasm entry point: install console logging, read the page config, and
/// mount the toggle for the lifetime of the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = crate::config::load_page_config();
    match mount(config) {
        Ok(handle) => handle.forget(),
        Err(e) => leptos::logging::warn!("theme toggle not mounted: {e}"),
    }
}
