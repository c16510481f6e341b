//! Reminder List Component
//!
//! Reminders in stored order, each with a remove button. Rows are addressed
//! by position, matching how the store deletes.

use leptos::prelude::*;
use plant_pal_core::{Intent, EMPTY_REMINDERS};

use crate::components::DeleteConfirmButton;
use crate::context::use_pal_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ReminderList() -> impl IntoView {
    let ctx = use_pal_context();
    let store = use_app_store();

    view! {
        <ul class="reminders" id="remindersList">
            {move || {
                let reminders = store.reminders().get();
                if reminders.is_empty() {
                    return view! { <li class="empty">{EMPTY_REMINDERS}</li> }.into_any();
                }
                reminders
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let text = ctx.describe(entry);
                        view! {
                            <li class="reminder-row">
                                <span>{text}</span>
                                <DeleteConfirmButton
                                    button_class="remove-btn"
                                    on_confirm=move |_: ()| ctx.dispatch(Intent::RemoveReminder(index))
                                />
                            </li>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </ul>
    }
}
