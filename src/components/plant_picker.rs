//! Plant Picker Component
//!
//! Search box and plant list. The list falls back to every plant when the
//! search matches nothing.

use leptos::prelude::*;
use plant_pal_core::Intent;

use crate::context::use_pal_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PlantPicker() -> impl IntoView {
    let ctx = use_pal_context();
    let store = use_app_store();

    let selected_id = move || store.selected().get().map(|p| p.id).unwrap_or_default();

    view! {
        <div class="plant-picker">
            <input
                type="search"
                id="plantSearch"
                placeholder="Search plants..."
                autocomplete="off"
                prop:value=move || store.query().get()
                on:input=move |ev| ctx.dispatch(Intent::Search(event_target_value(&ev)))
            />
            <select
                id="plantSelect"
                on:change=move |ev| ctx.dispatch(Intent::SelectPlant(event_target_value(&ev)))
            >
                <For
                    each=move || store.visible().get()
                    key=|plant| plant.id.clone()
                    children=move |plant| {
                        let id = plant.id.clone();
                        view! {
                            <option value=plant.id prop:selected=move || selected_id() == id>
                                {plant.name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
