//! # theme-toggle
//!
//! Leptos + WASM light/dark theme toggle with `localStorage` persistence.
//!
//! On page load the controller resolves the active theme (stored preference,
//! optional system preference, then the configured default), marks the
//! document root with a `data-theme` attribute, and mounts a single toggle
//! button into `<body>`. Each click flips the marker and writes the new
//! preference back to storage on a best-effort basis.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod marker;
pub mod mount;
pub mod storage;
pub mod theme;

pub use config::{LightMarker, ThemeConfig};
pub use controller::{Initialized, PreferenceSource, ThemePreferenceController, Toggled};
pub use error::{ConfigError, MarkerError, MountError, StorageError, ThemeParseError};
pub use mount::{ToggleHandle, mount};
pub use theme::Theme;
