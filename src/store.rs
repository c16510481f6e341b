//! Global Application State Store
//!
//! Reactive snapshot of the session's view state, for fine-grained
//! re-rendering with Leptos reactive_stores.

use chrono::TimeZone;
use leptos::prelude::*;
use plant_pal_core::{KeyValueStore, PlantRecord, ReminderEntry, Session};
use reactive_stores::Store;

/// What the page renders
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current search text
    pub query: String,
    /// Plants shown in the picker
    pub visible: Vec<PlantRecord>,
    /// Plant shown in the detail card
    pub selected: Option<PlantRecord>,
    /// Reminders in list order
    pub reminders: Vec<ReminderEntry>,
}

impl AppState {
    pub fn from_session<S: KeyValueStore, Tz: TimeZone>(session: &Session<S, Tz>) -> Self {
        Self {
            query: session.query().to_string(),
            visible: session.visible().into_iter().cloned().collect(),
            selected: session.selected().cloned(),
            reminders: session.reminders().to_vec(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
