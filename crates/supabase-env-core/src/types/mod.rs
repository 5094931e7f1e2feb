//! Core types for configuration discovery

mod keys;
mod config;

pub use keys::RequiredKey;
pub use config::ResolvedConfig;
