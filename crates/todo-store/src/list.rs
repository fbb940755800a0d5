//! Visible Entry List
//!
//! Model of the visible list container. Fresh and restored labels go
//! through the same `render_item` so both behave identically afterwards.

use crate::entry::{EntryId, VisualEntry};
use crate::filter::Filter;

#[derive(Debug, Clone, Default)]
pub struct TodoList {
    entries: Vec<VisualEntry>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry for `label` at the end. Labels are not validated.
    pub fn render_item(&mut self, label: &str) -> EntryId {
        self.next_id += 1;
        let id = EntryId(self.next_id);
        self.entries.push(VisualEntry::new(id, label));
        id
    }

    pub fn entries(&self) -> &[VisualEntry] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&VisualEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut VisualEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &VisualEntry> {
        self.entries.iter().filter(|e| e.visible)
    }

    /// Set visibility of every current entry from `filter`
    pub fn apply_filter(&mut self, filter: Filter) {
        for entry in &mut self.entries {
            entry.visible = filter.admits(entry.is_completed());
        }
    }

    /// Take an entry out of the container
    pub fn detach(&mut self, id: EntryId) -> Option<VisualEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_appends_in_order() {
        let mut list = TodoList::new();
        let a = list.render_item("a");
        let b = list.render_item("b");
        let empty = list.render_item("");

        assert_ne!(a, b);
        let labels: Vec<&str> = list.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", ""]);
        assert_eq!(list.ids(), vec![a, b, empty]);
        assert!(list.entries().iter().all(|e| e.visible && !e.is_completed()));
    }

    #[test]
    fn test_ids_are_not_reused_after_detach() {
        let mut list = TodoList::new();
        let a = list.render_item("a");
        assert!(list.detach(a).is_some());
        assert!(list.is_empty());

        let b = list.render_item("a");
        assert_ne!(a, b);
        assert!(list.detach(a).is_none());
    }

    #[test]
    fn test_filter_partitions_entries() {
        let mut list = TodoList::new();
        let ids: Vec<EntryId> = ["one", "two", "three"]
            .iter()
            .map(|label| list.render_item(label))
            .collect();
        list.get_mut(ids[0]).unwrap().toggle_complete();
        list.get_mut(ids[2]).unwrap().toggle_complete();

        let visible = |list: &TodoList| -> Vec<EntryId> {
            list.visible_entries().map(|e| e.id).collect()
        };

        list.apply_filter(Filter::Completed);
        assert_eq!(visible(&list), vec![ids[0], ids[2]]);

        list.apply_filter(Filter::Incomplete);
        assert_eq!(visible(&list), vec![ids[1]]);

        list.apply_filter(Filter::All);
        assert_eq!(visible(&list), ids);
    }
}
