//! Application Context
//!
//! The controller lives in one signal provided via the Leptos Context API.
//! Components never touch storage or the entry list directly.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use todo_store::{Action, ClickOutcome, Controller, EntryId, Filter, TodoConfig, VisualEntry};

use crate::storage::BrowserStorage;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: RwSignal<Controller<BrowserStorage>>,
}

impl AppContext {
    pub fn new(config: TodoConfig) -> Self {
        Self {
            controller: RwSignal::new(Controller::new(BrowserStorage, config)),
        }
    }

    /// Restore persisted entries
    pub fn load(&self) {
        self.controller.update(|c| match c.on_load() {
            Ok(count) => log::info!("[APP] Loaded {} todos", count),
            Err(e) => log::error!("[APP] Failed to load todos: {}", e),
        });
    }

    pub fn entry_ids(&self) -> Vec<EntryId> {
        self.controller.with(|c| c.list().ids())
    }

    pub fn entry(&self, id: EntryId) -> Option<VisualEntry> {
        self.controller.with(|c| c.list().get(id).cloned())
    }

    /// Entry label without subscribing; labels never change
    pub fn label(&self, id: EntryId) -> String {
        self.controller
            .with_untracked(|c| c.list().get(id).map(|e| e.label.clone()))
            .unwrap_or_default()
    }

    pub fn input(&self) -> String {
        self.controller.with(|c| c.input().to_string())
    }

    pub fn set_input(&self, value: String) {
        self.controller.update(|c| c.set_input(value));
    }

    pub fn submit(&self) {
        self.controller.update(|c| match c.submit() {
            Ok(Some(id)) => log::debug!("[APP] Added todo {}", id),
            Ok(None) => {}
            Err(e) => log::error!("[APP] Failed to save todo: {}", e),
        });
    }

    pub fn click(&self, id: EntryId, action: Action) {
        let outcome = self.controller.try_update(|c| c.click(id, action));
        match outcome {
            Some(Ok(ClickOutcome::RemovalRequested(id))) => self.schedule_fallback_removal(id),
            Some(Ok(_)) | None => {}
            Some(Err(e)) => log::error!("[APP] Failed to remove todo {}: {}", id, e),
        }
    }

    /// Called when the entry's slide-out transition ends
    pub fn finalize_removal(&self, id: EntryId) {
        if self.controller.try_update(|c| c.finalize_removal(id)) == Some(true) {
            log::debug!("[APP] Removed todo {}", id);
        }
    }

    /// Finalize even if `transitionend` never fires
    fn schedule_fallback_removal(&self, id: EntryId) {
        let ctx = *self;
        let delay = self.controller.with_untracked(|c| c.config().removal_fallback_ms);
        Timeout::new(delay, move || ctx.finalize_removal(id)).forget();
    }

    pub fn filter(&self) -> Filter {
        self.controller.with(|c| c.filter())
    }

    pub fn change_filter(&self, value: &str) {
        self.controller.update(|c| {
            if c.change_filter(value).is_none() {
                log::warn!("[APP] Ignoring unknown filter {:?}", value);
            }
        });
    }
}
