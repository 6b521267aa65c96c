//! Capability-checked preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` can be missing, disabled, blocked in private browsing, or
//! over quota. Stores report that as `StorageError` instead of throwing, and
//! the controller decides when to degrade to session-only state.

use std::collections::HashMap;

use crate::error::StorageError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Origin-scoped string key-value store.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means the store works but holds no value.
    fn try_get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    fn try_set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`.
///
/// The storage object is looked up on every call so a store that becomes
/// available (or unavailable) mid-session is seen as such. Outside a browser
/// build every call reports `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::unavailable("no window"))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::unavailable("localStorage is disabled")),
        Err(e) => Err(StorageError::unavailable(format!("localStorage access denied: {e:?}"))),
    }
}

impl PreferenceStore for LocalStore {
    fn try_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::unavailable(format!("read failed: {e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::unavailable("not running in a browser"))
        }
    }

    fn try_set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::unavailable(format!("write failed: {e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::unavailable("not running in a browser"))
        }
    }
}

/// In-memory test double; reads and writes can be made to fail
/// independently.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose every access fails, as with storage disabled entirely.
    pub fn unavailable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Make reads fail from now on.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make writes fail from now on, as with a full quota.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current value of `key`, bypassing failure injection.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of write attempts, successful or not.
    pub fn write_attempts(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn try_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::unavailable("reads disabled"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn try_set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        if self.fail_writes {
            return Err(StorageError::unavailable("quota exceeded"));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
