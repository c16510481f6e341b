//! Domain Layer
//!
//! Plant records, reminder entries and the errors shared across layers.

mod error;
mod plant;
mod reminder;

pub use error::{CatalogError, CatalogResult, StorageError, StorageResult, StoreError, StoreResult};
pub use plant::PlantRecord;
pub use reminder::{add_calendar_days, iso_millis, ReminderEntry};
