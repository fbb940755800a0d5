//! Todo Store
//!
//! Target-independent core of the todo list UI: the persisted label list,
//! the visible entry model and the controller that keeps them in step.
//! The browser crate only supplies a storage backend and renders the model.

mod config;
mod controller;
mod entry;
mod error;
mod filter;
mod list;
mod storage;
mod store;


pub use config::{TodoConfig, DEFAULT_REMOVAL_FALLBACK_MS, DEFAULT_STORAGE_KEY};
pub use controller::{ClickOutcome, Controller};
pub use entry::{Action, EntryId, EntryState, VisualEntry};
pub use error::{StoreError, StoreResult};
pub use filter::{Filter, ParseFilterError, FILTER_OPTIONS};
pub use list::TodoList;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TodoStore;
