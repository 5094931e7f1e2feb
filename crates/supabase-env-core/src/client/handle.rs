//! A single client handle

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use super::error::{ClientError, ClientResult};
use crate::types::RequiredKey;

/// Which credential a handle carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientRole {
    /// Service-role key; bypasses row-level security
    Privileged,
    /// Anonymous key; subject to row-level security
    Restricted,
}

impl ClientRole {
    /// The configuration key holding this role's credential
    pub fn credential(&self) -> RequiredKey {
        match self {
            ClientRole::Privileged => RequiredKey::ServiceKey,
            ClientRole::Restricted => RequiredKey::AnonKey,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientRole::Privileged => "privileged",
            ClientRole::Restricted => "restricted",
        }
    }
}

impl std::fmt::Display for ClientRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headers every request from a handle carries: `apikey` and a bearer
/// `Authorization`, both marked sensitive
pub fn auth_headers(key: &str, role: ClientRole) -> ClientResult<HeaderMap> {
    let invalid = |_| ClientError::InvalidKey { role };

    let mut apikey = HeaderValue::from_str(key).map_err(invalid)?;
    apikey.set_sensitive(true);

    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key)).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", apikey);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

/// Build a client handle for `base_url` authenticated with `key`
///
/// No network I/O happens here; connections are opened lazily by the first
/// request.
pub fn create_client(base_url: &str, key: &str, role: ClientRole) -> ClientResult<PlatformClient> {
    let http = reqwest::Client::builder()
        .default_headers(auth_headers(key, role)?)
        .build()?;

    Ok(PlatformClient {
        role,
        base_url: base_url.trim_end_matches('/').to_string(),
        api_key: Arc::from(key),
        http,
    })
}

/// An immutable, authenticated handle to the hosted platform
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` is itself
/// reference counted.
#[derive(Clone)]
pub struct PlatformClient {
    role: ClientRole,
    base_url: String,
    api_key: Arc<str>,
    http: reqwest::Client,
}

impl PlatformClient {
    pub fn role(&self) -> ClientRole {
        self.role
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential this handle authenticates with
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Underlying HTTP client, with auth headers already applied
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for a path relative to the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// PostgREST endpoint
    pub fn rest_url(&self) -> String {
        self.endpoint("rest/v1")
    }

    /// GoTrue auth endpoint
    pub fn auth_url(&self) -> String {
        self.endpoint("auth/v1")
    }

    /// Storage endpoint
    pub fn storage_url(&self) -> String {
        self.endpoint("storage/v1")
    }

    /// Start a request against `path`; nothing is sent until the caller
    /// awaits `send()`
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.endpoint(path))
    }
}

impl std::fmt::Debug for PlatformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformClient")
            .field("role", &self.role)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
