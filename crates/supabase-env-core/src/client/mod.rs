//! Platform client handles
//!
//! Two handles share one base URL: the privileged one carries the service
//! key, the restricted one the anonymous key. Construction only prepares an
//! HTTP client with the platform's auth headers; no request is sent.

mod error;
mod handle;
mod pair;

pub use error::{ClientError, ClientResult};
pub use handle::{auth_headers, create_client, ClientRole, PlatformClient};
pub use pair::PlatformClients;
