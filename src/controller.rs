//! Theme preference lifecycle: resolve, apply, toggle, persist.
//!
//! DESIGN
//! ======
//! The controller owns an explicit store and marker instead of reaching for
//! globals, so the whole lifecycle runs against in-memory doubles in tests and
//! against `localStorage` plus `<html>` in the browser.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. The first storage failure flips the controller
//! into session-only mode for the rest of the page lifetime; the document
//! marker stays authoritative and the user never sees an error. If the marker
//! itself rejects a write, the controller's own copy of the theme takes over
//! so clicks keep flipping.

use crate::config::ThemeConfig;
use crate::error::{MarkerError, StorageError};
use crate::marker::ThemeMarker;
use crate::storage::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Where the initial theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceSource {
    /// A valid value was already in storage.
    Stored,
    /// Nothing stored; the system color-scheme preference was used.
    System,
    /// Nothing usable stored; the configured default was used.
    Default,
}

/// Outcome of [`ThemePreferenceController::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Initialized {
    pub theme: Theme,
    pub source: PreferenceSource,
    /// The document marker shows `theme` after the call.
    pub applied: bool,
    /// Storage holds `theme` after the call.
    pub persisted: bool,
}

/// Outcome of [`ThemePreferenceController::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toggled {
    pub theme: Theme,
    /// The document marker shows the new theme.
    pub applied: bool,
    /// The new theme reached storage.
    pub persisted: bool,
}

/// Owns the theme state for one page.
#[derive(Debug)]
pub struct ThemePreferenceController<S, M> {
    config: ThemeConfig,
    store: S,
    marker: M,
    system_hint: Option<Theme>,
    theme: Theme,
    session_only: bool,
    marker_detached: bool,
}

impl<S: PreferenceStore, M: ThemeMarker> ThemePreferenceController<S, M> {
    pub fn new(config: ThemeConfig, store: S, marker: M) -> Self {
        Self {
            config,
            store,
            marker,
            system_hint: None,
            theme: Theme::Light,
            session_only: false,
            marker_detached: false,
        }
    }

    /// System color-scheme preference, consulted only when
    /// `follow_system` is enabled.
    #[must_use]
    pub fn with_system_hint(mut self, hint: Option<Theme>) -> Self {
        self.system_hint = hint;
        self
    }

    /// Resolve the initial theme and mark the document with it.
    pub fn initialize(&mut self) -> Initialized {
        let stored = match self.store.try_get(&self.config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                self.degrade(&e);
                None
            }
        };

        let stored_theme = stored.as_deref().and_then(Theme::from_stored);
        if let (Some(raw), None) = (&stored, stored_theme) {
            leptos::logging::warn!("ignoring unrecognized stored theme {raw:?}");
        }

        let (theme, source) = match (stored_theme, self.system_hint) {
            (Some(theme), _) => (theme, PreferenceSource::Stored),
            (None, Some(hint)) if self.config.follow_system => (hint, PreferenceSource::System),
            (None, _) => (self.config.default_theme, PreferenceSource::Default),
        };

        let applied = self.apply(theme);

        let persisted = match source {
            PreferenceSource::Stored => true,
            PreferenceSource::Default if self.config.persist_default => self.persist(theme),
            PreferenceSource::Default | PreferenceSource::System => false,
        };

        leptos::logging::log!("theme initialized: {theme} ({source:?}, persisted={persisted})");
        Initialized {
            theme,
            source,
            applied,
            persisted,
        }
    }

    /// Theme currently marked on the document, or the last applied theme
    /// once the marker has rejected a write.
    pub fn current(&self) -> Theme {
        if self.marker_detached {
            return self.theme;
        }
        Theme::from_marker(self.marker.read().as_deref())
    }

    /// Flip the document theme and persist the new value.
    pub fn toggle(&mut self) -> Toggled {
        let theme = self.current().toggled();
        let applied = self.apply(theme);
        let persisted = self.persist(theme);
        leptos::logging::log!("theme toggled to {theme} (applied={applied}, persisted={persisted})");
        Toggled {
            theme,
            applied,
            persisted,
        }
    }

    /// The marker has rejected a write; `current` no longer reads it.
    pub fn is_marker_detached(&self) -> bool {
        self.marker_detached
    }

    /// Storage has failed at least once; further writes are skipped.
    pub fn is_session_only(&self) -> bool {
        self.session_only
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    fn apply(&mut self, theme: Theme) -> bool {
        self.theme = theme;
        let value = self.config.marker_value(theme);
        match self.marker.write(value) {
            Ok(()) => true,
            Err(e) => {
                self.detach_marker(&e);
                false
            }
        }
    }

    fn detach_marker(&mut self, err: &MarkerError) {
        if !self.marker_detached {
            leptos::logging::warn!("theme marker not applied, tracking theme in memory: {err}");
        }
        self.marker_detached = true;
    }

    fn persist(&mut self, theme: Theme) -> bool {
        if self.session_only {
            return false;
        }
        match self.store.try_set(&self.config.storage_key, theme.as_str()) {
            Ok(()) => true,
            Err(e) => {
                self.degrade(&e);
                false
            }
        }
    }

    fn degrade(&mut self, err: &StorageError) {
        if !self.session_only {
            leptos::logging::warn!("theme preference is session-only: {err}");
        }
        self.session_only = true;
    }
}
