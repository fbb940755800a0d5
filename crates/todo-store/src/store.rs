//! Persisted Label Store
//!
//! Owns the durable mirror of the todo list: a JSON array of labels under a
//! single key. Every mutation is a read-modify-write of the whole array.

use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::StoreResult;
use crate::storage::KeyValueStorage;

pub struct TodoStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TodoStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All persisted labels in order. An unset key is an empty list.
    pub fn load(&self) -> StoreResult<Vec<String>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(labels) => Ok(labels),
            Err(e) => {
                log::warn!("[STORE] Ignoring unreadable value under {:?}: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    /// Append `label` at the end of the persisted list
    pub fn append(&self, label: &str) -> StoreResult<()> {
        let mut labels = self.load()?;
        labels.push(label.to_string());
        self.save(&labels)
    }

    /// Remove the first label equal to `label`. An absent label still
    /// rewrites the unchanged list.
    pub fn remove(&self, label: &str) -> StoreResult<()> {
        let mut labels = self.load()?;
        if let Some(index) = labels.iter().position(|l| l == label) {
            labels.remove(index);
        }
        self.save(&labels)
    }

    fn save(&self, labels: &[String]) -> StoreResult<()> {
        let raw = serde_json::to_string(labels)?;
        log::debug!("[STORE] Writing {} labels to {:?}", labels.len(), self.key);
        self.storage.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_load_unset_key_is_empty() {
        let store = TodoStore::new(MemoryStorage::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let store = TodoStore::new(MemoryStorage::new());
        store.append("L1").unwrap();
        store.append("L2").unwrap();
        store.append("L3").unwrap();

        assert_eq!(store.load().unwrap(), vec!["L1", "L2", "L3"]);
    }

    #[test]
    fn test_persisted_format_is_json_array() {
        let storage = MemoryStorage::new();
        let store = TodoStore::new(&storage);
        store.append("buy milk").unwrap();
        store.append("").unwrap();

        assert_eq!(storage.raw("todos").as_deref(), Some(r#"["buy milk",""]"#));
    }

    #[test]
    fn test_remove_first_match_only() {
        let store = TodoStore::new(MemoryStorage::new());
        for label in ["a", "b", "a"] {
            store.append(label).unwrap();
        }

        store.remove("a").unwrap();
        assert_eq!(store.load().unwrap(), vec!["b", "a"]);
    }

    #[test]
    fn test_remove_missing_label_rewrites_unchanged() {
        let storage = MemoryStorage::with_value("todos", r#"["x"]"#);
        let store = TodoStore::new(&storage);

        store.remove("y").unwrap();
        assert_eq!(storage.writes(), 1);
        assert_eq!(store.load().unwrap(), vec!["x"]);
    }

    #[test]
    fn test_corrupt_value_loads_as_empty() {
        let storage = MemoryStorage::with_value("todos", "{not json");
        let store = TodoStore::new(&storage);
        assert!(store.load().unwrap().is_empty());

        store.append("fresh").unwrap();
        assert_eq!(storage.raw("todos").as_deref(), Some(r#"["fresh"]"#));
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let store = TodoStore::with_key(&storage, "other");
        store.append("a").unwrap();

        assert_eq!(store.key(), "other");
        assert!(storage.raw("todos").is_none());
        assert_eq!(storage.raw("other").as_deref(), Some(r#"["a"]"#));
    }
}
