//! The privileged/restricted handle pair

use std::sync::Arc;

use super::error::ClientResult;
use super::handle::{create_client, ClientRole, PlatformClient};
use crate::types::ResolvedConfig;

/// Both client handles, built from one resolved configuration
///
/// # Example
///
/// ```
/// use supabase_env_core::{PlatformClients, ResolvedConfig};
///
/// let config = ResolvedConfig::new("https://abc.supabase.co", "service", "anon").unwrap();
/// let clients = PlatformClients::from_config(&config).unwrap();
/// assert_eq!(clients.privileged().base_url(), clients.restricted().base_url());
/// ```
#[derive(Debug, Clone)]
pub struct PlatformClients {
    privileged: Arc<PlatformClient>,
    restricted: Arc<PlatformClient>,
}

impl PlatformClients {
    /// Build the privileged handle from the service key and the restricted
    /// handle from the anon key, both against the same base URL
    pub fn from_config(config: &ResolvedConfig) -> ClientResult<Self> {
        let privileged = Self::build(config, ClientRole::Privileged)?;
        let restricted = Self::build(config, ClientRole::Restricted)?;
        Ok(Self {
            privileged: Arc::new(privileged),
            restricted: Arc::new(restricted),
        })
    }

    fn build(config: &ResolvedConfig, role: ClientRole) -> ClientResult<PlatformClient> {
        create_client(config.url(), config.get(role.credential()), role)
    }

    /// Handle authenticated with the service key
    pub fn privileged(&self) -> Arc<PlatformClient> {
        Arc::clone(&self.privileged)
    }

    /// Handle authenticated with the anon key
    pub fn restricted(&self) -> Arc<PlatformClient> {
        Arc::clone(&self.restricted)
    }

    /// Handle for a given role
    pub fn get(&self, role: ClientRole) -> Arc<PlatformClient> {
        match role {
            ClientRole::Privileged => self.privileged(),
            ClientRole::Restricted => self.restricted(),
        }
    }
}
