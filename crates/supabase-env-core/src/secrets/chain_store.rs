//! Chained store with fallback behavior

use std::sync::Arc;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// A store that chains several stores together with fallback behavior
///
/// Reads try each store in order and return the first store that has the key
/// set, so an earlier store always shadows a later one, even with an empty
/// value. Writes go to the first store.
///
/// # Example
///
/// ```
/// use supabase_env_core::secrets::{SecretStore, ChainSecretStore, EnvSecretStore, MemorySecretStore};
/// use std::sync::Arc;
///
/// let overlay = Arc::new(MemorySecretStore::new());
/// overlay.store("SOME_KEY", "value").unwrap();
///
/// // Environment first, overlay only fills gaps
/// let stores: Vec<Arc<dyn SecretStore>> = vec![Arc::new(EnvSecretStore::new()), overlay];
/// let chain = ChainSecretStore::new(stores);
/// assert!(chain.is_set("SOME_KEY"));
/// ```
pub struct ChainSecretStore {
    stores: Vec<Arc<dyn SecretStore>>,
}

impl ChainSecretStore {
    pub fn new(stores: Vec<Arc<dyn SecretStore>>) -> Self {
        Self { stores }
    }

    /// Get the stores in this chain
    pub fn stores(&self) -> &[Arc<dyn SecretStore>] {
        &self.stores
    }
}

impl SecretStore for ChainSecretStore {
    fn name(&self) -> &str {
        "chain"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.stores.iter().find_map(|store| store.get(key))
    }

    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()> {
        match self.stores.first() {
            Some(store) => store.store(key, value),
            None => Err(SecretStoreError::ReadOnly),
        }
    }
}

impl std::fmt::Debug for ChainSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stores.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainSecretStore").field("stores", &names).finish()
    }
}
