//! Error types for storage access, configuration, and mounting.

/// Persistent storage could not be read or written.
///
/// Covers disabled storage, privacy-mode blocking, and quota errors alike.
/// Callers treat it as "no persistence this session" rather than a failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StorageError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }
}

/// Error returned by [`crate::config::ThemeConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The payload was not valid JSON for a `ThemeConfig`.
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required field is blank.
    #[error("invalid theme config: {field} must not be empty")]
    Invalid { field: &'static str },
    /// A DOM name the browser would refuse (whitespace, bad characters).
    #[error("invalid theme config: {field} {value:?} is not a valid name")]
    InvalidName { field: &'static str, value: String },
}

/// The root theme attribute could not be written.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("no document root element")]
    NoRoot,
    #[error("attribute {attribute:?} rejected: {reason}")]
    Rejected { attribute: String, reason: String },
}

/// Error returned by [`crate::mount::mount`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("{0}")]
    InvalidConfig(String),
    #[error("no browser document available")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("theme toggle is already mounted")]
    AlreadyMounted,
}

/// A string that names neither `light` nor `dark`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);
