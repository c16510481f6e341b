//! Reminder Store
//!
//! Owns the session's reminder list and writes the whole list through to a
//! `KeyValueStore` on every mutation. Last writer wins; there is no merge.

use chrono::{DateTime, TimeZone};

use crate::domain::{PlantRecord, ReminderEntry, StoreError, StoreResult};
use super::traits::KeyValueStore;

/// Key the reminder list is stored under
pub const STORAGE_KEY: &str = "plantpal.reminders";

/// Serialize the full list as a JSON array
pub fn encode_entries(entries: &[ReminderEntry]) -> StoreResult<String> {
    serde_json::to_string(entries).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Parse a stored list. Anything that is not an array of well-formed
/// entries (including `null`) decodes to an empty list.
pub fn decode_entries(raw: &str) -> Vec<ReminderEntry> {
    match serde_json::from_str::<Option<Vec<ReminderEntry>>>(raw) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(e) => {
            log::warn!("discarding unreadable reminder data: {}", e);
            Vec::new()
        }
    }
}

/// Reminder list with write-through persistence
pub struct ReminderStore<S: KeyValueStore> {
    backend: S,
    key: String,
    entries: Vec<ReminderEntry>,
}

impl<S: KeyValueStore> ReminderStore<S> {
    /// Load reminders stored under `key`. Never fails: a missing,
    /// unreadable or malformed value starts an empty list.
    pub fn open(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match backend.get(&key) {
            Ok(Some(raw)) => decode_entries(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("could not read {}: {}", key, e);
                Vec::new()
            }
        };
        log::debug!("loaded {} reminders from {}", entries.len(), key);
        Self { backend, key, entries }
    }

    /// Open under [`STORAGE_KEY`]
    pub fn open_default(backend: S) -> Self {
        Self::open(backend, STORAGE_KEY)
    }

    /// Entries in insertion order; deletion is by position in this slice
    pub fn list(&self) -> &[ReminderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Append a reminder due `every_days` calendar days after `now` and persist.
    pub fn add<Tz: TimeZone>(
        &mut self,
        plant_id: &str,
        plant_name: &str,
        every_days: u32,
        now: &DateTime<Tz>,
    ) -> StoreResult<&ReminderEntry> {
        let entry = ReminderEntry::schedule(plant_id, plant_name, every_days, now)
            .ok_or(StoreError::InvalidInterval(every_days))?;

        let mut next = self.entries.clone();
        next.push(entry);
        self.commit(next)?;
        log::debug!("added reminder for {} every {} days", plant_id, every_days);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Add a reminder using the plant's id, name and default interval
    pub fn add_for_plant<Tz: TimeZone>(
        &mut self,
        plant: &PlantRecord,
        now: &DateTime<Tz>,
    ) -> StoreResult<&ReminderEntry> {
        self.add(&plant.id, &plant.name, plant.default_reminder_days, now)
    }

    /// Delete the entry at `index` and persist.
    ///
    /// An out-of-range index is a no-op that neither writes nor errors.
    pub fn remove(&mut self, index: usize) -> StoreResult<Option<ReminderEntry>> {
        if index >= self.entries.len() {
            log::debug!("ignoring removal of reminder #{} (have {})", index, self.entries.len());
            return Ok(None);
        }
        let mut next = self.entries.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(Some(removed))
    }

    /// Write `next` and adopt it only if the write succeeded
    fn commit(&mut self, next: Vec<ReminderEntry>) -> StoreResult<()> {
        let raw = encode_entries(&next)?;
        if let Err(e) = self.backend.set(&self.key, &raw) {
            log::error!("failed to save reminders to {}: {}", self.key, e);
            return Err(e.into());
        }
        self.entries = next;
        Ok(())
    }
}
