//! New Item Form Component
//!
//! Text input and submit button for adding todos.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        // Keep the page from navigating
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="new-item-form" on:submit=add_todo>
            <input
                type="text"
                class="todo-input"
                placeholder="Add a todo..."
                prop:value=move || ctx.input()
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <button class="todo-button" type="submit">
                <i class="fas fa-plus-square"></i>
            </button>
        </form>
    }
}
