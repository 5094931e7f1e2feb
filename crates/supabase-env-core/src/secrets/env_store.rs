//! Environment variable store

use std::env;

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// Store that reads the ambient process environment
///
/// Read-only: the resolver layers file values over it in memory instead of
/// writing them back with `set_var`. Keys are looked up by their exact
/// variable name. A variable that is set but empty still claims its key.
///
/// # Example
///
/// ```
/// use supabase_env_core::secrets::{SecretStore, EnvSecretStore};
///
/// let store = EnvSecretStore::new();
/// let url = store.get("SUPABASE_URL");
/// ```
#[derive(Debug, Default)]
pub struct EnvSecretStore {
    _private: (),
}

impl EnvSecretStore {
    /// Create a new environment variable store
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SecretStore for EnvSecretStore {
    fn name(&self) -> &str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}
