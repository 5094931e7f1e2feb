//! Client construction errors

use thiserror::Error;

use super::handle::ClientRole;

/// Errors that can occur while building a client handle
#[derive(Error, Debug)]
pub enum ClientError {
    /// The key cannot be sent as an HTTP header value
    #[error("{role} key contains characters not allowed in an HTTP header")]
    InvalidKey { role: ClientRole },

    /// The underlying HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;
