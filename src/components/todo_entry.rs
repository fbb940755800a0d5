//! Todo Entry Component
//!
//! A single row in the todo list with its complete and delete buttons.

use leptos::prelude::*;
use todo_store::{Action, EntryId};

use crate::context::AppContext;

fn icon_class(action: Action) -> &'static str {
    match action {
        Action::Complete => "fas fa-check-circle",
        Action::Delete => "fas fa-trash",
    }
}

#[component]
pub fn TodoEntry(id: EntryId) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let label = ctx.label(id);
    let entry = move || ctx.entry(id);

    let row_class = move || {
        let mut c = String::from("todo");
        if let Some(e) = entry() {
            if e.is_completed() { c.push_str(" completed"); }
            if e.is_pending_removal() { c.push_str(" slide"); }
        }
        c
    };
    let display = move || {
        if entry().map_or(true, |e| e.visible) { "flex" } else { "none" }
    };

    view! {
        <div
            class=row_class
            style:display=display
            on:transitionend=move |_| ctx.finalize_removal(id)
        >
            <li class="todo-item">{label}</li>
            {Action::ALL.into_iter().map(|action| view! {
                <button class=action.css_class() on:click=move |_| ctx.click(id, action)>
                    <i class=icon_class(action)></i>
                </button>
            }).collect_view()}
        </div>
    }
}
