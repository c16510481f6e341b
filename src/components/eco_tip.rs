//! Eco Tip Component

use chrono::Utc;
use leptos::prelude::*;

use crate::context::use_pal_context;

/// Tip of the day, picked when the page loads
#[component]
pub fn EcoTip() -> impl IntoView {
    let ctx = use_pal_context();
    let tip = ctx.tip_of_day(Utc::now());

    view! {
        <aside class="eco-tip">
            <strong>"Eco tip: "</strong>
            <span id="ecoTip">{tip}</span>
        </aside>
    }
}
