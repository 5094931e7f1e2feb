//! Resolution failure

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::RequiredKey;

/// Required configuration is still missing after every source was tried
///
/// The message lists the missing variable names and every searched `.env`
/// path, in order, so an operator can fix the deployment without reading
/// source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Missing Supabase configuration. Please check your .env file.\nMissing keys: {}\nSearched .env paths (in order):\n - {}",
    join_keys(.missing),
    join_paths(.searched)
)]
pub struct ConfigurationError {
    /// Keys still unset, in `RequiredKey::ALL` order
    pub missing: Vec<RequiredKey>,
    /// Every candidate path, whether or not it existed
    pub searched: Vec<PathBuf>,
}

pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

impl ConfigurationError {
    pub fn new<'a>(missing: Vec<RequiredKey>, searched: impl IntoIterator<Item = &'a Path>) -> Self {
        Self {
            missing,
            searched: searched.into_iter().map(Path::to_path_buf).collect(),
        }
    }
}

fn join_keys(keys: &[RequiredKey]) -> String {
    keys.iter().map(|k| k.env_var()).collect::<Vec<_>>().join(", ")
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n - ")
}
