//! Core traits and types for key/value sources

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed .env file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Trait for key/value sources
///
/// `get` returns the value exactly as set, including an empty one. A key set
/// to an empty string is claimed: it shadows later stores in a chain and a
/// later `.env` file cannot fill it, but it does not count as usable.
///
/// # Example
///
/// ```
/// use supabase_env_core::secrets::{SecretStore, MemorySecretStore};
///
/// let store = MemorySecretStore::new();
/// store.store("SUPABASE_URL", "https://example.supabase.co").unwrap();
/// assert!(store.has("SUPABASE_URL"));
/// ```
pub trait SecretStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Retrieve a value by key, empty or not
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value
    ///
    /// Returns `Err(SecretStoreError::ReadOnly)` if the store doesn't support writing.
    fn store(&self, key: &str, value: &str) -> SecretStoreResult<()>;

    /// Check if the key is set at all, even to an empty string
    fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Check if the key holds a usable (non-empty) value
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::MemorySecretStore;

    #[test]
    fn test_empty_value_is_set_but_unusable() {
        let store = MemorySecretStore::from_pairs([("SUPABASE_URL", "")]);
        assert!(store.is_set("SUPABASE_URL"));
        assert!(!store.has("SUPABASE_URL"));
        assert!(!store.is_set("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = SecretStoreError::Parse {
            path: PathBuf::from("/srv/app/.env"),
            message: "bad line".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed .env file /srv/app/.env: bad line");

        let err = SecretStoreError::NotFound(PathBuf::from("/srv/.env"));
        assert_eq!(err.to_string(), "File not found: /srv/.env");
    }
}
