//! Todo Controller
//!
//! Application context constructed once at startup. Event handlers in the
//! view call into it; it mutates the store first, then the entry list.

use crate::config::TodoConfig;
use crate::entry::{Action, EntryId};
use crate::error::StoreResult;
use crate::filter::Filter;
use crate::list::TodoList;
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;

/// What a click on an entry button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Toggled { completed: bool },
    /// The view must finalize this entry once its slide-out ends
    RemovalRequested(EntryId),
    Ignored,
}

pub struct Controller<S> {
    store: TodoStore<S>,
    list: TodoList,
    input: String,
    filter: Filter,
    config: TodoConfig,
}

impl<S: KeyValueStorage> Controller<S> {
    pub fn new(storage: S, config: TodoConfig) -> Self {
        Self {
            store: TodoStore::with_key(storage, config.storage_key.clone()),
            list: TodoList::new(),
            input: String::new(),
            filter: Filter::default(),
            config,
        }
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Render every persisted label. Never writes to storage.
    pub fn on_load(&mut self) -> StoreResult<usize> {
        let labels = self.store.load()?;
        for label in &labels {
            self.list.render_item(label);
        }
        log::debug!("[CONTROLLER] Restored {} entries", labels.len());
        Ok(labels.len())
    }

    /// Add the current input as a new entry. Empty input is ignored.
    pub fn submit(&mut self) -> StoreResult<Option<EntryId>> {
        if self.input.is_empty() {
            return Ok(None);
        }
        let label = std::mem::take(&mut self.input);
        let id = self.list.render_item(&label);
        if let Err(e) = self.store.append(&label) {
            // Keep what the user typed so the add can be retried
            self.list.detach(id);
            self.input = label;
            return Err(e);
        }
        log::debug!("[CONTROLLER] Added entry {}", id);
        Ok(Some(id))
    }

    /// Dispatch a button click on entry `id`
    pub fn click(&mut self, id: EntryId, action: Action) -> StoreResult<ClickOutcome> {
        let Some(entry) = self.list.get_mut(id) else {
            return Ok(ClickOutcome::Ignored);
        };
        match action {
            Action::Complete => {
                if !entry.toggle_complete() {
                    return Ok(ClickOutcome::Ignored);
                }
                Ok(ClickOutcome::Toggled {
                    completed: entry.is_completed(),
                })
            }
            Action::Delete => {
                if !entry.is_active() {
                    return Ok(ClickOutcome::Ignored);
                }
                // Matches by label: duplicates always lose their earliest copy
                self.store.remove(&entry.label)?;
                entry.request_removal();
                log::debug!("[CONTROLLER] Entry {} pending removal", id);
                Ok(ClickOutcome::RemovalRequested(id))
            }
        }
    }

    /// Detach an entry whose slide-out finished. Safe to call more than
    /// once; only the first call after a removal request has an effect.
    pub fn finalize_removal(&mut self, id: EntryId) -> bool {
        let finalized = self
            .list
            .get_mut(id)
            .is_some_and(|entry| entry.finalize_removal());
        if finalized {
            self.list.detach(id);
            log::debug!("[CONTROLLER] Entry {} removed", id);
        }
        finalized
    }

    /// Apply the filter named by `value`; unknown values change nothing
    pub fn change_filter(&mut self, value: &str) -> Option<Filter> {
        match value.parse::<Filter>() {
            Ok(filter) => {
                self.filter = filter;
                self.list.apply_filter(filter);
                Some(filter)
            }
            Err(e) => {
                log::debug!("[CONTROLLER] {}", e);
                None
            }
        }
    }
}
