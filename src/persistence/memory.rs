//! In-process storage used on native builds and in tests

use std::cell::RefCell;
use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    /// Simulates a browser with storage disabled (every call fails)
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            unavailable: true,
        }
    }

    /// Pre-populate a key (test setup)
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_overwrite() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.len(), 1);

        storage.set_item("k", "w").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("w"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_unavailable_rejects_everything() {
        let storage = MemoryStorage::unavailable();
        assert_eq!(storage.get_item("k"), Err(StorageError::Unavailable));
        assert_eq!(storage.set_item("k", "v"), Err(StorageError::Unavailable));
    }
}
