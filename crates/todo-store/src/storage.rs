//! Storage Layer - Key-Value Trait
//!
//! Durable storage only offers whole-value get/set of strings.
//! The browser crate implements it over `localStorage`; tests use
//! [`MemoryStorage`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StoreResult;

/// Whole-value string storage
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` if the key is unset
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-process storage double
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value without counting it as a write
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw value currently stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_key_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("todos").unwrap(), None);
    }

    #[test]
    fn test_set_counts_writes() {
        let storage = MemoryStorage::with_value("todos", "[]");
        assert_eq!(storage.writes(), 0);

        storage.set("todos", r#"["a"]"#).unwrap();
        assert_eq!(storage.writes(), 1);
        assert_eq!(storage.raw("todos").as_deref(), Some(r#"["a"]"#));
    }
}
