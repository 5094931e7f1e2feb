//! Configuration discovery
//!
//! Looks for the required keys in the ambient environment first, then in an
//! ordered list of candidate `.env` files, and produces either a complete
//! `ResolvedConfig` or a `ConfigurationError` describing what was searched.

mod candidates;
mod error;
mod report;
mod config_resolver;

pub use candidates::{Candidate, CandidateKind, CandidateSources, ENV_FILE_NAME};
pub use error::{ConfigurationError, ConfigurationResult};
pub use report::{KeySource, Probe, ProbeOutcome, ResolutionReport};
pub use config_resolver::{ConfigResolver, Resolution};
