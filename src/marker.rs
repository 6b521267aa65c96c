//! Theme marker on the document root element.
//!
//! Companion stylesheets select on `html[data-theme="dark"]`. The marker is
//! the session's source of truth for the current theme: a click reads it,
//! not storage.

use crate::error::MarkerError;

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

/// Read/write access to the root theme attribute.
pub trait ThemeMarker {
    /// Current attribute value, `None` when absent.
    fn read(&self) -> Option<String>;

    /// Set the attribute to `value`, or remove it when `None`.
    fn write(&mut self, value: Option<&str>) -> Result<(), MarkerError>;
}

/// Attribute on `document.documentElement`. No-op outside a browser build.
#[derive(Clone, Debug)]
pub struct RootElementMarker {
    attribute: String,
}

impl RootElementMarker {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
}

impl ThemeMarker for RootElementMarker {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            root_element().and_then(|el| el.get_attribute(&self.attribute))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&mut self, value: Option<&str>) -> Result<(), MarkerError> {
        #[cfg(feature = "hydrate")]
        {
            let el = root_element().ok_or(MarkerError::NoRoot)?;
            let result = match value {
                Some(value) => el.set_attribute(&self.attribute, value),
                None => el.remove_attribute(&self.attribute),
            };
            result.map_err(|e| MarkerError::Rejected {
                attribute: self.attribute.clone(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Ok(())
        }
    }
}

/// Marker held in memory, standing in for the document in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryMarker {
    value: Option<String>,
    fail_writes: bool,
}

impl MemoryMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            fail_writes: false,
        }
    }

    /// Make writes fail, as `setAttribute` does for a rejected name.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeMarker for MemoryMarker {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, value: Option<&str>) -> Result<(), MarkerError> {
        if self.fail_writes {
            return Err(MarkerError::Rejected {
                attribute: "data-theme".to_owned(),
                reason: "InvalidCharacterError".to_owned(),
            });
        }
        self.value = value.map(str::to_owned);
        Ok(())
    }
}
