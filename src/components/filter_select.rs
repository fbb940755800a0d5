//! Filter Select Component

use leptos::prelude::*;
use todo_store::FILTER_OPTIONS;

use crate::context::AppContext;

/// Completion filter for the visible entries
#[component]
pub fn FilterSelect() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="select">
            <select
                name="todos"
                class="filter-todo"
                prop:value=move || ctx.filter().as_str()
                on:change=move |ev| ctx.change_filter(&event_target_value(&ev))
            >
                {FILTER_OPTIONS.iter().map(|(filter, label)| view! {
                    <option value=filter.as_str()>{*label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
