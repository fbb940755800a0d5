//! Visual Entries
//!
//! One rendered row per label. Completion and visibility live here only;
//! neither is persisted.

use std::fmt;

/// Session-local identity of a rendered entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Action attached to an entry's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Complete,
    Delete,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Complete, Action::Delete];

    /// Leading class token of the button carrying this action
    pub fn css_class(self) -> &'static str {
        match self {
            Action::Complete => "complete-btn",
            Action::Delete => "trash-btn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Active { completed: bool },
    /// Removed from the store, waiting for the slide-out to finish.
    /// Keeps the completed flag so the row does not restyle mid-animation.
    PendingRemoval { completed: bool },
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualEntry {
    pub id: EntryId,
    pub label: String,
    pub state: EntryState,
    pub visible: bool,
}

impl VisualEntry {
    pub fn new(id: EntryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            state: EntryState::Active { completed: false },
            visible: true,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(
            self.state,
            EntryState::Active { completed: true } | EntryState::PendingRemoval { completed: true }
        )
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, EntryState::Active { .. })
    }

    pub fn is_pending_removal(&self) -> bool {
        matches!(self.state, EntryState::PendingRemoval { .. })
    }

    /// Flip the completed flag. Only active entries toggle.
    pub fn toggle_complete(&mut self) -> bool {
        match &mut self.state {
            EntryState::Active { completed } => {
                *completed = !*completed;
                true
            }
            _ => false,
        }
    }

    /// Active -> PendingRemoval
    pub fn request_removal(&mut self) -> bool {
        let EntryState::Active { completed } = self.state else {
            return false;
        };
        self.state = EntryState::PendingRemoval { completed };
        true
    }

    /// PendingRemoval -> Removed
    pub fn finalize_removal(&mut self) -> bool {
        if !self.is_pending_removal() {
            return false;
        }
        self.state = EntryState::Removed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_self_loop() {
        let mut entry = VisualEntry::new(EntryId(1), "a");
        assert!(!entry.is_completed());

        assert!(entry.toggle_complete());
        assert!(entry.is_completed());
        assert!(entry.toggle_complete());
        assert_eq!(entry.state, EntryState::Active { completed: false });
    }

    #[test]
    fn test_removal_lifecycle() {
        let mut entry = VisualEntry::new(EntryId(1), "a");
        entry.toggle_complete();

        // Cannot finalize before removal was requested
        assert!(!entry.finalize_removal());

        assert!(entry.request_removal());
        assert!(entry.is_pending_removal());

        // No way back from PendingRemoval
        assert!(!entry.toggle_complete());
        assert!(!entry.request_removal());
        assert_eq!(entry.state, EntryState::PendingRemoval { completed: true });
        assert!(entry.is_completed());

        assert!(entry.finalize_removal());
        assert_eq!(entry.state, EntryState::Removed);
        assert!(!entry.finalize_removal());
    }

    #[test]
    fn test_action_classes() {
        assert_eq!(Action::Complete.css_class(), "complete-btn");
        assert_eq!(Action::Delete.css_class(), "trash-btn");
    }
}
