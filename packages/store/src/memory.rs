use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::SessionStorage;

/// In-memory SessionStorage for testing and non-web fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }

    fn clear(&self) {
        self.values.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();
        assert!(storage.get("token").is_none());

        storage.set("token", "abc");
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
    }

    #[test]
    fn test_clones_share_the_map() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("userName", "Siti");
        assert_eq!(other.get("userName").as_deref(), Some("Siti"));
    }

    #[test]
    fn test_remove_and_clear() {
        let storage = MemoryStorage::new();
        storage.set("a", "1");
        storage.set("b", "2");

        storage.remove("a");
        assert!(storage.get("a").is_none());
        assert_eq!(storage.get("b").as_deref(), Some("2"));

        storage.clear();
        assert!(storage.get("b").is_none());
    }
}
