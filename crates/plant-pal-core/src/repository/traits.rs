//! Repository Layer - Core Traits
//!
//! Abstract key-value access. Implementations can use browser
//! `localStorage`, an in-memory map, etc.

use crate::domain::StorageResult;

/// Opaque string-blob storage keyed by string
///
/// Calls are synchronous; a single page session is the only writer.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if it was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
