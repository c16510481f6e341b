//! Plant Pal Core
//!
//! Layered architecture:
//! - domain: plant records, reminder entries, errors
//! - catalog: read-only plant and tip dataset
//! - repository: key-value abstraction and the reminder store
//! - session: user intents routed to catalog and store
//! - display: reminder text for the page

pub mod catalog;
pub mod display;
pub mod domain;
pub mod repository;
pub mod session;

pub use catalog::{Catalog, ONE_DAY_MS};
pub use display::{describe_reminder, format_due, EMPTY_REMINDERS};
pub use domain::{
    CatalogError, CatalogResult, PlantRecord, ReminderEntry, StorageError, StorageResult,
    StoreError, StoreResult,
};
pub use repository::{KeyValueStore, MemoryStore, ReminderStore, STORAGE_KEY};
pub use session::{Intent, Session};
