//! Process-wide initialization
//!
//! Call `initialize()` once during startup, before serving anything. After
//! that, `get_privileged_client()` and `get_restricted_client()` hand out the
//! shared handles; before it they return `InitError::NotInitialized` instead
//! of a half-built client.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::client::{ClientError, PlatformClient, PlatformClients};
use crate::resolver::{ConfigResolver, ConfigurationError};
use crate::{debug_log, warn_log};

static CLIENTS: OnceCell<PlatformClients> = OnceCell::new();

/// Errors from process initialization and the client accessors
#[derive(Error, Debug)]
pub enum InitError {
    /// Required configuration is missing; the process must not start
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A client handle could not be built
    #[error(transparent)]
    Client(#[from] ClientError),

    /// An accessor ran before `initialize()` succeeded
    #[error("Supabase clients requested before initialization")]
    NotInitialized,
}

pub type InitResult<T> = Result<T, InitError>;

/// Resolve configuration from the environment and default `.env` locations
/// and build both client handles
///
/// Idempotent: once it has succeeded, later calls return the existing
/// handles without resolving again. A failure leaves the process
/// uninitialized.
pub fn initialize() -> InitResult<&'static PlatformClients> {
    initialize_with(&ConfigResolver::new())
}

/// `initialize()` with a caller-configured resolver
pub fn initialize_with(resolver: &ConfigResolver) -> InitResult<&'static PlatformClients> {
    initialize_cell(&CLIENTS, resolver)
}

fn initialize_cell<'a>(
    cell: &'a OnceCell<PlatformClients>,
    resolver: &ConfigResolver,
) -> InitResult<&'a PlatformClients> {
    cell.get_or_try_init(|| {
        let resolution = resolver.resolve().map_err(|e| {
            warn_log!("Initialization aborted: {}", e);
            e
        })?;

        if let Ok(json) = resolution.report.to_json() {
            debug_log!("Resolution report: {}", json);
        }

        Ok(PlatformClients::from_config(&resolution.config)?)
    })
}

/// Whether `initialize()` has completed successfully
pub fn is_initialized() -> bool {
    CLIENTS.get().is_some()
}

/// Both handles, if initialized
pub fn clients() -> InitResult<&'static PlatformClients> {
    CLIENTS.get().ok_or(InitError::NotInitialized)
}

/// The shared handle authenticated with the service key
pub fn get_privileged_client() -> InitResult<Arc<PlatformClient>> {
    clients().map(PlatformClients::privileged)
}

/// The shared handle authenticated with the anon key
pub fn get_restricted_client() -> InitResult<Arc<PlatformClient>> {
    clients().map(PlatformClients::restricted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::CandidateSources;
    use crate::secrets::MemorySecretStore;
    use crate::types::RequiredKey;
    use tempfile::tempdir;

    fn resolver(pairs: &[(&str, &str)], dir: &std::path::Path) -> ConfigResolver {
        ConfigResolver::new()
            .with_ambient(Arc::new(MemorySecretStore::from_pairs(pairs.iter().copied())))
            .with_candidates(CandidateSources::new(dir, dir.join("a").join("b")))
    }

    #[test]
    fn test_initialize_cell_builds_both_handles() {
        let dir = tempdir().unwrap();
        let cell = OnceCell::new();
        let resolver = resolver(
            &[
                ("SUPABASE_URL", "https://abc.supabase.co"),
                ("SUPABASE_SERVICE_KEY", "service"),
                ("SUPABASE_ANON_KEY", "anon"),
            ],
            dir.path(),
        );

        let clients = initialize_cell(&cell, &resolver).unwrap();
        assert_eq!(clients.privileged().api_key(), "service");
        assert_eq!(clients.restricted().api_key(), "anon");
    }

    #[test]
    fn test_initialize_cell_is_idempotent() {
        let dir = tempdir().unwrap();
        let cell = OnceCell::new();
        let first = resolver(
            &[
                ("SUPABASE_URL", "https://first.supabase.co"),
                ("SUPABASE_SERVICE_KEY", "service"),
                ("SUPABASE_ANON_KEY", "anon"),
            ],
            dir.path(),
        );
        let second = resolver(&[], dir.path());

        let a = initialize_cell(&cell, &first).unwrap().privileged();
        // Already initialized: the empty resolver is never consulted
        let b = initialize_cell(&cell, &second).unwrap().privileged();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.base_url(), "https://first.supabase.co");
    }

    #[test]
    fn test_failed_initialization_leaves_cell_empty() {
        let dir = tempdir().unwrap();
        let cell = OnceCell::new();
        let resolver = resolver(&[("SUPABASE_URL", "https://abc.supabase.co")], dir.path());

        let err = initialize_cell(&cell, &resolver).unwrap_err();
        match err {
            InitError::Configuration(e) => {
                assert_eq!(e.missing, vec![RequiredKey::ServiceKey, RequiredKey::AnonKey]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(cell.get().is_none());
    }

    #[test]
    fn test_client_error_propagates() {
        let dir = tempdir().unwrap();
        let cell = OnceCell::new();
        let resolver = resolver(
            &[
                ("SUPABASE_URL", "https://abc.supabase.co"),
                ("SUPABASE_SERVICE_KEY", "bad\nkey"),
                ("SUPABASE_ANON_KEY", "anon"),
            ],
            dir.path(),
        );

        let err = initialize_cell(&cell, &resolver).unwrap_err();
        assert!(matches!(err, InitError::Client(_)));
    }

    #[test]
    fn test_configuration_error_message_is_transparent() {
        let err = InitError::from(ConfigurationError::new(
            vec![RequiredKey::AnonKey],
            [std::path::Path::new("/srv/.env")],
        ));
        assert!(err.to_string().starts_with("Missing Supabase configuration."));
    }
}
