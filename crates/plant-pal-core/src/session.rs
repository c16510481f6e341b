//! Session
//!
//! Routes discrete user intents to catalog queries and reminder store
//! mutations, and keeps the view state the page renders from. Any UI layer,
//! or a test driving intents directly, goes through `dispatch`.

use chrono::{DateTime, TimeZone, Utc};

use crate::catalog::Catalog;
use crate::domain::{PlantRecord, ReminderEntry, StoreResult};
use crate::repository::{KeyValueStore, ReminderStore};

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search text changed
    Search(String),
    /// A plant was picked from the list
    SelectPlant(String),
    /// "Remind me" on the selected plant
    RemindSelected { now: DateTime<Utc> },
    /// "Remove" on reminder row `n`
    RemoveReminder(usize),
}

/// Catalog, reminder store and view state for one page session
///
/// `tz` is the viewer's zone: reminders are scheduled in whole calendar
/// days of that zone.
pub struct Session<S: KeyValueStore, Tz: TimeZone> {
    catalog: Catalog,
    store: ReminderStore<S>,
    tz: Tz,
    query: String,
    selected: Option<String>,
}

impl<S: KeyValueStore, Tz: TimeZone> Session<S, Tz> {
    /// Start with every plant visible and the first one selected
    pub fn new(catalog: Catalog, store: ReminderStore<S>, tz: Tz) -> Self {
        let selected = catalog.all().first().map(|p| p.id.clone());
        Self {
            catalog,
            store,
            tz,
            query: String::new(),
            selected,
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> StoreResult<()> {
        match intent {
            Intent::Search(query) => {
                self.query = query;
                let visible = self.catalog.search(&self.query);
                let still_visible = self
                    .selected
                    .as_deref()
                    .is_some_and(|id| visible.iter().any(|p| p.id == id));
                if !still_visible {
                    self.selected = visible.first().map(|p| p.id.clone());
                }
            }
            Intent::SelectPlant(id) => {
                if self.catalog.find(&id).is_some() {
                    self.selected = Some(id);
                } else {
                    log::debug!("ignoring selection of unknown plant {}", id);
                }
            }
            Intent::RemindSelected { now } => {
                let Some(id) = self.selected.as_deref() else {
                    return Ok(());
                };
                if let Some(plant) = self.catalog.find(id) {
                    let now = now.with_timezone(&self.tz);
                    self.store.add_for_plant(plant, &now)?;
                }
            }
            Intent::RemoveReminder(index) => {
                self.store.remove(index)?;
            }
        }
        Ok(())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Plants matching the current query (all of them when nothing matches)
    pub fn visible(&self) -> Vec<&PlantRecord> {
        self.catalog.search(&self.query)
    }

    pub fn selected(&self) -> Option<&PlantRecord> {
        self.selected.as_deref().and_then(|id| self.catalog.find(id))
    }

    pub fn reminders(&self) -> &[ReminderEntry] {
        self.store.list()
    }

    pub fn store(&self) -> &ReminderStore<S> {
        &self.store
    }

    /// Viewer's zone, used for scheduling and for showing due times
    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    pub fn tip_of_day(&self, now: &DateTime<Utc>) -> &str {
        self.catalog.tip_of_day(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use crate::repository::{MemoryStore, STORAGE_KEY};

    fn session() -> Session<MemoryStore, Utc> {
        let store = ReminderStore::open_default(MemoryStore::new());
        Session::new(Catalog::builtin(), store, Utc)
    }

    fn visible_ids<S: KeyValueStore, Tz: TimeZone>(session: &Session<S, Tz>) -> Vec<String> {
        session.visible().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_starts_with_first_plant_selected() {
        let session = session();
        assert_eq!(session.selected().map(|p| p.id.as_str()), Some("basil"));
        assert_eq!(session.visible().len(), 5);
        assert!(session.reminders().is_empty());
    }

    #[test]
    fn test_search_moves_selection_to_first_match() {
        let mut session = session();
        session.dispatch(Intent::Search("plant".to_string())).unwrap();
        assert_eq!(visible_ids(&session), vec!["snake", "spider"]);
        assert_eq!(session.selected().map(|p| p.id.as_str()), Some("snake"));

        // Selection survives a search that still shows it
        session.dispatch(Intent::SelectPlant("spider".to_string())).unwrap();
        session.dispatch(Intent::Search("SPI".to_string())).unwrap();
        assert_eq!(session.selected().map(|p| p.id.as_str()), Some("spider"));
    }

    #[test]
    fn test_search_without_match_shows_all() {
        let mut session = session();
        session.dispatch(Intent::Search("orchid".to_string())).unwrap();
        assert_eq!(session.visible().len(), 5);
        assert_eq!(session.query(), "orchid");
    }

    #[test]
    fn test_unknown_selection_is_ignored() {
        let mut session = session();
        session.dispatch(Intent::SelectPlant("cactus".to_string())).unwrap();
        assert_eq!(session.selected().map(|p| p.id.as_str()), Some("basil"));
    }

    #[test]
    fn test_remind_selected_uses_default_interval() {
        let mut session = session();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        session.dispatch(Intent::SelectPlant("pothos".to_string())).unwrap();
        session.dispatch(Intent::RemindSelected { now }).unwrap();

        let reminders = session.reminders();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].plant_id, "pothos");
        assert_eq!(reminders[0].every_days, 7);
        assert_eq!(reminders[0].next_due, Utc.with_ymd_and_hms(2024, 3, 8, 9, 0, 0).unwrap());
        assert!(session.store().backend().raw(STORAGE_KEY).is_some());
    }

    #[test]
    fn test_remind_schedules_in_viewer_zone() {
        let tz = FixedOffset::west_opt(8 * 3600).unwrap();
        let store = ReminderStore::open_default(MemoryStore::new());
        let mut session = Session::new(Catalog::builtin(), store, tz);
        // 2024-03-31 20:00 local on the viewer's clock
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 4, 0, 0).unwrap();

        session.dispatch(Intent::RemindSelected { now }).unwrap();

        let due = session.reminders()[0].next_due.with_timezone(&tz);
        assert_eq!(due, tz.with_ymd_and_hms(2024, 4, 2, 20, 0, 0).unwrap());
    }

    #[test]
    fn test_remove_reminder_by_position() {
        let mut session = session();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        for id in ["basil", "snake", "spider"] {
            session.dispatch(Intent::SelectPlant(id.to_string())).unwrap();
            session.dispatch(Intent::RemindSelected { now }).unwrap();
        }

        session.dispatch(Intent::RemoveReminder(1)).unwrap();
        session.dispatch(Intent::RemoveReminder(42)).unwrap();

        let ids: Vec<&str> = session.reminders().iter().map(|r| r.plant_id.as_str()).collect();
        assert_eq!(ids, vec!["basil", "spider"]);
    }

    #[test]
    fn test_reminder_text_uses_session_zone() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let store = ReminderStore::open_default(MemoryStore::new());
        let mut session = Session::new(Catalog::builtin(), store, tz);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();

        session.dispatch(Intent::RemindSelected { now }).unwrap();

        let text = crate::display::describe_reminder(&session.reminders()[0], session.time_zone());
        assert_eq!(text, "Basil: every 2 day(s). Next: 2024-03-04 00:30");
    }

    #[test]
    fn test_empty_catalog_has_nothing_to_remind() {
        let catalog = Catalog::new(vec![], vec!["Water early.".to_string()]).unwrap();
        let store = ReminderStore::open_default(MemoryStore::new());
        let mut session = Session::new(catalog, store, Utc);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

        session.dispatch(Intent::RemindSelected { now }).unwrap();

        assert!(session.selected().is_none());
        assert!(session.reminders().is_empty());
    }
}
