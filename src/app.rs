//! Todo List App
//!
//! Main application component: input form, filter and the entry list.

use leptos::prelude::*;
use todo_store::TodoConfig;

use crate::components::{FilterSelect, NewItemForm, TodoEntry};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(TodoConfig::default());

    // Provide context to all children
    provide_context(ctx);

    // Restore persisted todos once, before the first render
    ctx.load();

    view! {
        <header>
            <h1>"Todo List"</h1>
        </header>

        <div class="controls">
            <NewItemForm />
            <FilterSelect />
        </div>

        <div class="todo-container">
            <ul class="todo-list">
                <For
                    each=move || ctx.entry_ids()
                    key=|id| *id
                    children=move |id| view! { <TodoEntry id=id /> }
                />
            </ul>
        </div>
    }
}
