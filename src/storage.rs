//! Browser Storage
//!
//! `localStorage`-backed implementation of `KeyValueStore`.

use plant_pal_core::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::{JsCast, JsValue};

/// Key-value access to `window.localStorage`
///
/// Holds `None` when storage is disabled (private mode, blocked cookies);
/// every call then fails with `Unavailable` and the reminder store keeps
/// working in memory.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; reminders will not survive a reload");
        }
        Self { storage }
    }

    fn storage(&self) -> StorageResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(to_storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(to_storage_error)
    }
}

/// Map a thrown DOMException onto the storage error kinds
fn to_storage_error(err: JsValue) -> StorageError {
    match err.dyn_ref::<web_sys::DomException>() {
        Some(ex) if ex.name() == "QuotaExceededError" => StorageError::QuotaExceeded(ex.message()),
        Some(ex) if ex.name() == "SecurityError" => StorageError::Unavailable(ex.message()),
        Some(ex) => StorageError::Backend(format!("{}: {}", ex.name(), ex.message())),
        None => StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err))),
    }
}
