//! The two-valued theme preference and its presentation strings.
//!
//! DESIGN
//! ======
//! `Theme` is the only piece of data the widget owns. Everything the toggle
//! shows (icon, tooltip, pressed state) describes the *next* action, so the
//! strings are keyed off the current theme and point at its inverse.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ThemeParseError;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Storage and marker representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon for the control: the sun offers light while dark is active.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Tooltip describing what a click will do.
    pub fn toggle_tooltip(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }

    /// Interpret a stored string. Anything other than the two known values
    /// yields `None` and is handled like a missing preference.
    pub fn from_stored(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Interpret the root marker attribute. Only `"dark"` means dark; an
    /// absent or unrecognized marker reads as light.
    pub fn from_marker(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value == Self::Dark.as_str() => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}
