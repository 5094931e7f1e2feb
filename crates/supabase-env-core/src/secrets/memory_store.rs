//! In-memory store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{SecretStore, SecretStoreResult};

/// In-memory read-write store
///
/// The resolver keeps values loaded from `.env` files here, so resolution
/// never mutates the process environment. Tests also use it to stand in for
/// the ambient environment.
///
/// # Example
///
/// ```
/// use supabase_env_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.store("SUPABASE_ANON_KEY", "anon").unwrap();
/// assert_eq!(store.get("SUPABASE_ANON_KEY"), Some("anon".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RwLock<HashMap<String, String>>,
}

impl MemorySecretStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            secrets: RwLock::new(HashMap::new()),
        }
    }

    /// Create a memory store with initial values
    pub fn with_secrets(initial: HashMap<String, String>) -> Self {
        Self {
            secrets: RwLock::new(initial),
        }
    }

    /// Create a memory store from key/value pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_secrets(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Get the number of values in the store
    pub fn len(&self) -> usize {
        self.secrets.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretStore for MemorySecretStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.secrets.read().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        self.secrets.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl Clone for MemorySecretStore {
    fn clone(&self) -> Self {
        Self::with_secrets(self.secrets.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_name() {
        let store = MemorySecretStore::new();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn test_memory_store_crud() {
        let store = MemorySecretStore::new();

        assert!(store.is_empty());
        assert_eq!(store.get("test"), None);

        store.store("test", "value").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("test"), Some("value".to_string()));
        assert!(store.has("test"));

        store.store("test", "new_value").unwrap();
        assert_eq!(store.get("test"), Some("new_value".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_keeps_empty_value() {
        let store = MemorySecretStore::from_pairs([("SUPABASE_URL", "")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("SUPABASE_URL"), Some(String::new()));
        assert!(!store.has("SUPABASE_URL"));
    }

    #[test]
    fn test_memory_store_from_pairs() {
        let store = MemorySecretStore::from_pairs([("key1", "value1"), ("key2", "value2")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.get("key2"), Some("value2".to_string()));
    }

    #[test]
    fn test_memory_store_clone_is_independent() {
        let store = MemorySecretStore::new();
        store.store("key", "value").unwrap();

        let cloned = store.clone();
        cloned.store("key", "modified").unwrap();

        assert_eq!(store.get("key"), Some("value".to_string()));
        assert_eq!(cloned.get("key"), Some("modified".to_string()));
    }
}
