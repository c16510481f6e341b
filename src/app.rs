//! Plant Pal Frontend App
//!
//! Builds the page session and lays out the picker, care card, reminders
//! and eco tip.

use chrono::Local;
use leptos::prelude::*;
use plant_pal_core::{Catalog, ReminderStore, Session};
use reactive_stores::Store;

use crate::components::{EcoTip, PlantDetails, PlantPicker, ReminderList};
use crate::context::PalContext;
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let reminders = ReminderStore::open_default(BrowserStorage::local());
    let session = Session::new(Catalog::builtin(), reminders, Local);
    provide_context(PalContext::new(session, store));

    view! {
        <main class="app-layout">
            <header>
                <h1>"Plant Pal"</h1>
                <EcoTip />
            </header>

            <PlantPicker />
            <PlantDetails />

            <section class="reminders-panel">
                <h2>"Watering reminders"</h2>
                <ReminderList />
            </section>
        </main>
    }
}
