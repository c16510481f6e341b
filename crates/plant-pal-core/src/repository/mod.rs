//! Repository Layer
//!
//! Key-value abstraction, its in-memory implementation and the reminder store.

mod traits;
mod memory;
mod reminder_store;


pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use reminder_store::{decode_entries, encode_entries, ReminderStore, STORAGE_KEY};
