//! In-Memory Key-Value Store
//!
//! HashMap-backed implementation of `KeyValueStore` for tests and headless
//! sessions. Can simulate a full or disabled backend.

use std::collections::HashMap;

use crate::domain::{StorageError, StorageResult};
use super::traits::KeyValueStore;

/// In-memory key-value store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// Max bytes per value; writes above it fail with `QuotaExceeded`
    quota: Option<usize>,
    disabled: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Make every read and write fail with `Unavailable`
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Raw stored value, bypassing the disabled flag
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.disabled {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if self.disabled {
            return Err(StorageError::Unavailable("memory store disabled".to_string()));
        }
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StorageError::QuotaExceeded(format!(
                    "{} bytes over a {} byte quota",
                    value.len(),
                    quota
                )));
            }
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
