//! Application Context
//!
//! The page session, provided via Leptos Context API. Components send
//! intents here; every dispatch refreshes the app store.

use chrono::{DateTime, Local, Utc};
use leptos::prelude::*;
use plant_pal_core::{describe_reminder, Intent, ReminderEntry, Session};

use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStore};

/// Session type used in the browser: `localStorage` and the viewer's local zone
pub type PalSession = Session<BrowserStorage, Local>;

#[derive(Clone, Copy)]
pub struct PalContext {
    /// Session lives on the local arena; web_sys handles are not Send
    session: StoredValue<PalSession, LocalStorage>,
    store: AppStore,
}

impl PalContext {
    pub fn new(session: PalSession, store: AppStore) -> Self {
        let ctx = Self {
            session: StoredValue::new_local(session),
            store,
        };
        ctx.refresh();
        ctx
    }

    /// Route a user intent to the session and re-render.
    ///
    /// Storage failures are logged; the session has already kept its list
    /// at the last saved state.
    pub fn dispatch(&self, intent: Intent) {
        log::debug!("dispatch {:?}", intent);
        match self.session.try_update_value(|s| s.dispatch(intent)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::error!("{}", e),
            None => log::warn!("session disposed, intent dropped"),
        }
        self.refresh();
    }

    pub fn tip_of_day(&self, now: DateTime<Utc>) -> String {
        self.session
            .try_with_value(|s| s.tip_of_day(&now).to_string())
            .unwrap_or_default()
    }

    /// Reminder row text in the viewer's zone
    pub fn describe(&self, entry: &ReminderEntry) -> String {
        self.session
            .try_with_value(|s| describe_reminder(entry, s.time_zone()))
            .unwrap_or_default()
    }

    fn refresh(&self) {
        if let Some(state) = self.session.try_with_value(|s| AppState::from_session(s)) {
            *self.store.write() = state;
        }
    }
}

/// Get the page session from context
pub fn use_pal_context() -> PalContext {
    expect_context::<PalContext>()
}
