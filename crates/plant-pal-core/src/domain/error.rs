//! Domain Errors
//!
//! Error types shared by the catalog, the key-value layer and the reminder store.

use thiserror::Error;

/// Result type for catalog construction
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for key-value backends
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for reminder store mutations
pub type StoreResult<T> = Result<T, StoreError>;

/// Rejected catalog data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate plant id: {0}")]
    DuplicateId(String),
    #[error("Empty field `{field}` on plant {id}")]
    EmptyField { id: String, field: &'static str },
    #[error("Invalid reminder interval on plant {0}: must be at least one day")]
    InvalidInterval(String),
    #[error("Catalog has no tips")]
    NoTips,
    #[error("Malformed catalog data: {0}")]
    Malformed(String),
}

/// Failure reported by a key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage is disabled or missing
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the write because it is full
    #[error("Storage quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Reminder store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Invalid input: cannot schedule a reminder every {0} days")]
    InvalidInterval(u32),
    #[error("Could not encode reminders: {0}")]
    Encode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_converts_into_store_error() {
        let err: StoreError = StorageError::QuotaExceeded("5 MB".to_string()).into();
        assert_eq!(err.to_string(), "Storage quota exceeded: 5 MB");
    }

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::EmptyField { id: "basil".to_string(), field: "soil" };
        assert_eq!(err.to_string(), "Empty field `soil` on plant basil");
    }
}
