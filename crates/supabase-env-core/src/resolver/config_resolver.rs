//! Ordered search for the required configuration
//!
//! Source priority (earlier wins, later sources only fill gaps):
//! 1. Ambient process environment
//! 2. `<cwd>/.env`
//! 3. `<module dir>/.env`
//! 4. `<module dir>/../.env`
//! 5. `<module dir>/../../.env`
//!
//! Files are only read while something is still missing, and a candidate
//! that cannot be read or parsed is skipped rather than failing the search.
//!
//! A key that is set to an empty string, in the environment or in an earlier
//! file, is claimed: later files cannot fill it and it still counts as
//! missing.

use std::sync::Arc;

use super::candidates::{Candidate, CandidateSources};
use super::error::{ConfigurationError, ConfigurationResult};
use super::report::{KeySource, ProbeOutcome, ResolutionReport};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::secrets::{
    ChainSecretStore, DotenvFileStore, EnvSecretStore, MemorySecretStore, SecretStore,
    SecretStoreError,
};
use crate::types::{RequiredKey, ResolvedConfig};
use crate::{debug_log, log_debug, log_error, log_info, log_warn, trace_log, warn_log};

/// A successful resolution
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub report: ResolutionReport,
}

impl Resolution {
    pub fn into_config(self) -> ResolvedConfig {
        self.config
    }
}

/// Resolves the base URL and both keys from the environment and candidate
/// `.env` files
///
/// The resolver never writes to the process environment. Values read from
/// files live in a private overlay behind the ambient store, so an ambient
/// value always shadows a file value and an earlier file shadows a later one.
///
/// # Example
///
/// ```no_run
/// use supabase_env_core::resolver::ConfigResolver;
///
/// let resolution = ConfigResolver::new().resolve()?;
/// println!("using {}", resolution.config.url());
/// # Ok::<(), supabase_env_core::resolver::ConfigurationError>(())
/// ```
#[derive(Clone)]
pub struct ConfigResolver {
    ambient: Arc<dyn SecretStore>,
    candidates: CandidateSources,
    logger: SharedLogger,
}

impl ConfigResolver {
    /// Resolver over the process environment and the default candidates
    pub fn new() -> Self {
        Self {
            ambient: Arc::new(EnvSecretStore::new()),
            candidates: CandidateSources::default_for_process(),
            logger: Arc::new(NoOpLogger::new()),
        }
    }

    /// Replace the ambient store (tests inject a `MemorySecretStore`)
    pub fn with_ambient(mut self, ambient: Arc<dyn SecretStore>) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_candidates(mut self, candidates: CandidateSources) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn candidates(&self) -> &CandidateSources {
        &self.candidates
    }

    /// Run the search
    ///
    /// Fails only when a required key is still unset or empty after every candidate
    /// has been tried; the error lists the missing keys and all candidate
    /// paths in search order.
    pub fn resolve(&self) -> ConfigurationResult<Resolution> {
        let overlay = Arc::new(MemorySecretStore::new());
        let layered = ChainSecretStore::new(vec![
            Arc::clone(&self.ambient),
            Arc::clone(&overlay) as Arc<dyn SecretStore>,
        ]);

        let mut report = ResolutionReport::new();
        for key in RequiredKey::ALL {
            if self.ambient.has(key.env_var()) {
                report.record_source(key, KeySource::Environment);
            }
        }

        let mut missing = missing_keys(&layered);
        if missing.is_empty() {
            debug_log!("All required keys present in {}, no .env probing", self.ambient.name());
        }

        for candidate in self.candidates.iter() {
            if missing.is_empty() {
                break;
            }
            let outcome = self.probe(candidate, &layered, &overlay, &mut report);
            report.record_probe(candidate.kind, &candidate.path, outcome);
            missing = missing_keys(&layered);
        }

        if !missing.is_empty() {
            let err = ConfigurationError::new(missing, self.candidates.paths());
            warn_log!("Configuration incomplete: {:?}", err.missing);
            log_error!(self.logger, "{}", err);
            return Err(err);
        }

        let config = ResolvedConfig::new(
            value_of(&layered, RequiredKey::BaseUrl),
            value_of(&layered, RequiredKey::ServiceKey),
            value_of(&layered, RequiredKey::AnonKey),
        )
        .map_err(|empty| ConfigurationError::new(empty, self.candidates.paths()))?;

        log_info!(
            self.logger,
            "Supabase configuration resolved for {} ({} .env file(s) probed)",
            config.url(),
            report.probe_count()
        );

        Ok(Resolution { config, report })
    }

    /// Load one candidate into the overlay, filling only keys nothing earlier
    /// has set
    fn probe(
        &self,
        candidate: &Candidate,
        layered: &ChainSecretStore,
        overlay: &MemorySecretStore,
        report: &mut ResolutionReport,
    ) -> ProbeOutcome {
        let path = &candidate.path;
        trace_log!("Probing {} candidate {}", candidate.kind.as_str(), path.display());

        let file = match DotenvFileStore::load(path) {
            Ok(file) => file,
            Err(SecretStoreError::NotFound(_)) => {
                log_debug!(self.logger, "No .env at {}", path.display());
                return ProbeOutcome::Missing;
            }
            Err(e) => {
                log_warn!(self.logger, "Skipping {}: {}", path.display(), e);
                return ProbeOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let mut contributed = Vec::new();
        for key in RequiredKey::ALL {
            if layered.is_set(key.env_var()) {
                continue;
            }
            let Some(value) = file.get(key.env_var()) else {
                continue;
            };
            if overlay.store(key.env_var(), &value).is_err() {
                continue;
            }
            if value.is_empty() {
                log_warn!(self.logger, "{} is empty in {}", key, path.display());
            } else {
                contributed.push(key);
                report.record_source(key, KeySource::File { path: path.clone() });
            }
        }

        debug_log!("Loaded {} ({} entries), filled {:?}", path.display(), file.len(), contributed);
        ProbeOutcome::Loaded { contributed }
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("ambient", &self.ambient.name())
            .field("candidates", &self.candidates)
            .finish()
    }
}

fn missing_keys(store: &dyn SecretStore) -> Vec<RequiredKey> {
    RequiredKey::ALL
        .into_iter()
        .filter(|k| !store.has(k.env_var()))
        .collect()
}

fn value_of(store: &dyn SecretStore, key: RequiredKey) -> String {
    store.get(key.env_var()).unwrap_or_default()
}
