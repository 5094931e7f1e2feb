//! Key/value sources consulted during configuration discovery
//!
//! - `SecretStore` trait shared by every source
//! - `EnvSecretStore`: the ambient process environment
//! - `DotenvFileStore`: one parsed `.env` file
//! - `MemorySecretStore`: in-memory, used as the resolver's overlay and in tests
//! - `ChainSecretStore`: ordered fallback across stores

mod traits;
mod env_store;
mod memory_store;
mod dotenv_store;
mod chain_store;

pub use traits::{SecretStore, SecretStoreError, SecretStoreResult};
pub use env_store::EnvSecretStore;
pub use memory_store::MemorySecretStore;
pub use dotenv_store::DotenvFileStore;
pub use chain_store::ChainSecretStore;
