//! Plant Details Component
//!
//! Care card for the selected plant with the "Remind me" action.

use chrono::Utc;
use leptos::prelude::*;
use plant_pal_core::{Intent, PlantRecord};

use crate::context::use_pal_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Care fields in display order
const CARE_FIELDS: &[(&str, fn(&PlantRecord) -> &str)] = &[
    ("Water", |p| p.water.as_str()),
    ("Light", |p| p.light.as_str()),
    ("Soil", |p| p.soil.as_str()),
    ("Companions", |p| p.companions.as_str()),
    ("Toxicity", |p| p.toxicity.as_str()),
    ("Tips", |p| p.tips.as_str()),
];

#[component]
pub fn PlantDetails() -> impl IntoView {
    let ctx = use_pal_context();
    let store = use_app_store();

    let remind = move |_: web_sys::MouseEvent| ctx.dispatch(Intent::RemindSelected { now: Utc::now() });

    move || {
        store.selected().get().map(|plant| {
            let rows = CARE_FIELDS
                .iter()
                .map(|(label, field)| {
                    let text = field(&plant).to_string();
                    view! {
                        <dt>{*label}</dt>
                        <dd>{text}</dd>
                    }
                })
                .collect_view();
            let days = plant.default_reminder_days;

            view! {
                <section class="details" id="details">
                    <h2 id="plantName">{plant.name.clone()}</h2>
                    <dl class="care-fields">{rows}</dl>
                    <button id="remindBtn" on:click=remind>
                        {format!("Remind me every {} day(s)", days)}
                    </button>
                </section>
            }
        })
    }
}
