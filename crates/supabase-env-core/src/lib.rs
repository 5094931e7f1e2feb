//! Supabase environment bootstrap
//!
//! Finds the platform's base URL, service key and anon key, then builds the
//! two client handles the rest of the backend uses.
//!
//! Values come from the process environment first. Anything still missing is
//! looked up in `.env` files, in order: the working directory, this crate's
//! directory, its parent and its grandparent. Environment values are never
//! overridden by file values, and the search stops as soon as all three keys
//! are known.
//!
//! ```rust,no_run
//! use supabase_env_core::bootstrap;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fails with the missing keys and every searched path
//!     bootstrap::initialize()?;
//!
//!     let admin = bootstrap::get_privileged_client()?;
//!     let public = bootstrap::get_restricted_client()?;
//!     println!("{} / {}", admin.rest_url(), public.auth_url());
//!     Ok(())
//! }
//! ```

pub mod types;
pub mod secrets;
pub mod logging;
pub mod resolver;
pub mod client;
pub mod bootstrap;

pub use types::{RequiredKey, ResolvedConfig};

pub use secrets::{
    SecretStore, SecretStoreError, SecretStoreResult,
    EnvSecretStore, MemorySecretStore, DotenvFileStore, ChainSecretStore,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger};

pub use resolver::{
    ConfigResolver, Resolution, ResolutionReport, CandidateSources,
    ConfigurationError, ConfigurationResult,
};

pub use client::{create_client, ClientError, ClientResult, ClientRole, PlatformClient, PlatformClients};

pub use bootstrap::{get_privileged_client, get_restricted_client, InitError, InitResult};
