//! UI Components
//!
//! Leptos components for the todo list.

mod filter_select;
mod new_item_form;
mod todo_entry;

pub use filter_select::FilterSelect;
pub use new_item_form::NewItemForm;
pub use todo_entry::TodoEntry;
