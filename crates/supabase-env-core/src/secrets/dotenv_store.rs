//! Store backed by a single `.env` file

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::{SecretStore, SecretStoreError, SecretStoreResult};

/// A parsed `.env` file
///
/// The file is read once, at construction; the store never writes back.
/// Parsing follows the usual dotenv conventions (`#` comments, quoted values,
/// optional `export` prefix). When a key appears twice, the later line wins.
/// `KEY=` is kept as an empty value.
///
/// # Example
///
/// ```no_run
/// use supabase_env_core::secrets::{SecretStore, DotenvFileStore};
///
/// let store = DotenvFileStore::load("/srv/backend/.env")?;
/// let url = store.get("SUPABASE_URL");
/// # Ok::<(), supabase_env_core::secrets::SecretStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DotenvFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl DotenvFileStore {
    /// Read and parse the file at `path`
    ///
    /// Errors with `NotFound` when nothing exists there, `NotAFile` for a
    /// directory or other non-regular entry, `Io` when reading fails and
    /// `Parse` for a malformed line or content that is not UTF-8. A malformed
    /// file yields no values at all.
    pub fn load(path: impl Into<PathBuf>) -> SecretStoreResult<Self> {
        let path = path.into();

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SecretStoreError::NotFound(path));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(SecretStoreError::NotAFile(path));
        }

        let content = fs::read(&path)?;
        Self::parse(path, &content)
    }

    /// Parse `.env` content as if it had been read from `path`
    pub fn parse(path: impl Into<PathBuf>, content: &[u8]) -> SecretStoreResult<Self> {
        let path = path.into();
        let mut values = HashMap::new();

        for item in dotenvy::from_read_iter(content) {
            let (key, value) = item.map_err(|e| SecretStoreError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;
            values.insert(key, value);
        }

        Ok(Self { path, values })
    }

    /// Path this store was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries in the file, including empty ones
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretStore for DotenvFileStore {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&self, _key: &str, _value: &str) -> SecretStoreResult<()> {
        Err(SecretStoreError::ReadOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_dotenv_syntax() {
        let content = b"# backend settings\n\
            SUPABASE_URL=https://abc.supabase.co\n\
            export SUPABASE_ANON_KEY=\"anon key\"\n\
            SUPABASE_SERVICE_KEY='service'\n\
            \n";
        let store = DotenvFileStore::parse("/tmp/.env", content).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("SUPABASE_URL"), Some("https://abc.supabase.co".to_string()));
        assert_eq!(store.get("SUPABASE_ANON_KEY"), Some("anon key".to_string()));
        assert_eq!(store.get("SUPABASE_SERVICE_KEY"), Some("service".to_string()));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let content = b"SUPABASE_URL=https://first\nSUPABASE_URL=https://second\n";
        let store = DotenvFileStore::parse("/tmp/.env", content).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("SUPABASE_URL"), Some("https://second".to_string()));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let store = DotenvFileStore::parse("/tmp/.env", b"SUPABASE_URL=\n").unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.is_set("SUPABASE_URL"));
        assert!(!store.has("SUPABASE_URL"));
    }

    #[test]
    fn test_invalid_utf8_fails_whole_file() {
        let err = DotenvFileStore::parse("/tmp/.env", b"GOOD=1\nSUPABASE_URL=\xff\xfe\n").unwrap_err();
        assert!(matches!(err, SecretStoreError::Parse { .. }));
    }

    #[test]
    fn test_malformed_line_fails_whole_file() {
        let err = DotenvFileStore::parse("/tmp/.env", b"GOOD=1\nthis is not valid\n").unwrap_err();
        assert!(matches!(err, SecretStoreError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = DotenvFileStore::load(dir.path().join(".env")).unwrap_err();
        assert!(matches!(err, SecretStoreError::NotFound(_)));
    }

    #[test]
    fn test_load_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::create_dir(&path).unwrap();

        let err = DotenvFileStore::load(&path).unwrap_err();
        assert!(matches!(err, SecretStoreError::NotAFile(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "SUPABASE_URL=https://disk.supabase.co\n").unwrap();

        let store = DotenvFileStore::load(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.get("SUPABASE_URL"), Some("https://disk.supabase.co".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_unreadable_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "SUPABASE_URL=https://disk.supabase.co\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores the mode bits, so the file may still be readable
        match fs::read(&path) {
            Ok(_) => assert!(DotenvFileStore::load(&path).is_ok()),
            Err(_) => {
                let err = DotenvFileStore::load(&path).unwrap_err();
                assert!(matches!(err, SecretStoreError::Io(_)));
            }
        }
    }

    #[test]
    fn test_read_only() {
        let store = DotenvFileStore::parse("/tmp/.env", b"").unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.store("k", "v"), Err(SecretStoreError::ReadOnly)));
    }
}
