//! Widget configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page may embed a JSON object in
//! `<script id="theme-toggle-config" type="application/json">` to override any
//! of these fields. Missing fields keep their defaults; a malformed payload is
//! logged and ignored.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the optional inline JSON config.
pub const PAGE_CONFIG_ELEMENT_ID: &str = "theme-toggle-config";

/// How the light theme is represented on the root element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightMarker {
    /// Attribute set to `"light"`.
    #[default]
    Explicit,
    /// Attribute removed; only dark is marked.
    Absent,
}

/// Settings for the theme controller and toggle control.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Theme used when nothing usable is stored.
    pub default_theme: Theme,
    /// Attribute set on `<html>` for stylesheets to select on.
    pub attribute: String,
    pub light_marker: LightMarker,
    /// Write the default back to storage when it was used.
    pub persist_default: bool,
    /// Consult `prefers-color-scheme` before falling back to the default.
    pub follow_system: bool,
    /// DOM id of the toggle button.
    pub control_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            default_theme: Theme::Dark,
            attribute: "data-theme".to_owned(),
            light_marker: LightMarker::Explicit,
            persist_default: true,
            follow_system: false,
            control_id: "theme-toggle".to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Behavior of the first published widget: light by default, light
    /// marked by removing the attribute, default never written back.
    pub fn legacy() -> Self {
        Self {
            default_theme: Theme::Light,
            light_marker: LightMarker::Absent,
            persist_default: false,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make storage or DOM calls meaningless.
    ///
    /// `setAttribute` throws on names that are not XML names, and an id with
    /// whitespace can never be found again by `getElementById`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("attribute", &self.attribute),
            ("control_id", &self.control_id),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid { field });
            }
        }
        if !is_xml_name(&self.attribute) {
            return Err(ConfigError::InvalidName {
                field: "attribute",
                value: self.attribute.clone(),
            });
        }
        if self.control_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidName {
                field: "control_id",
                value: self.control_id.clone(),
            });
        }
        Ok(())
    }

    /// Marker attribute value for `theme`, or `None` to remove it.
    pub fn marker_value(&self, theme: Theme) -> Option<&'static str> {
        match (theme, self.light_marker) {
            (Theme::Light, LightMarker::Absent) => None,
            (theme, _) => Some(theme.as_str()),
        }
    }
}

/// XML `Name` production, as enforced by `Element.setAttribute`.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let start = |c: char| c.is_alphabetic() || c == '_' || c == ':';
    start(first) && chars.all(|c| start(c) || c.is_alphanumeric() || matches!(c, '-' | '.'))
}

/// Read the inline page config, falling back to defaults.
pub fn load_page_config() -> ThemeConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(PAGE_CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        if let Some(raw) = raw {
            match ThemeConfig::from_json(&raw) {
                Ok(config) => return config,
                Err(e) => leptos::logging::warn!("ignoring page theme config: {e}"),
            }
        }
    }
    ThemeConfig::default()
}
