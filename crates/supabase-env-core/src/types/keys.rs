//! The fixed set of required configuration keys

use serde::Serialize;

/// A configuration value the platform clients cannot be built without
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RequiredKey {
    /// Base URL of the hosted platform
    #[serde(rename = "SUPABASE_URL")]
    BaseUrl,
    /// Service-role key, used by the privileged client
    #[serde(rename = "SUPABASE_SERVICE_KEY")]
    ServiceKey,
    /// Anonymous key, used by the restricted client
    #[serde(rename = "SUPABASE_ANON_KEY")]
    AnonKey,
}

impl RequiredKey {
    /// All required keys, in reporting order
    pub const ALL: [RequiredKey; 3] = [
        RequiredKey::BaseUrl,
        RequiredKey::ServiceKey,
        RequiredKey::AnonKey,
    ];

    /// Environment variable (and `.env` key) holding this value
    pub fn env_var(&self) -> &'static str {
        match self {
            RequiredKey::BaseUrl => "SUPABASE_URL",
            RequiredKey::ServiceKey => "SUPABASE_SERVICE_KEY",
            RequiredKey::AnonKey => "SUPABASE_ANON_KEY",
        }
    }

    /// Look up a key by its environment variable name
    pub fn from_env_var(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.env_var() == name)
    }

    /// Whether the value is a credential and must not be logged
    pub fn is_secret(&self) -> bool {
        !matches!(self, RequiredKey::BaseUrl)
    }
}

impl std::fmt::Display for RequiredKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.env_var())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_names() {
        assert_eq!(RequiredKey::BaseUrl.env_var(), "SUPABASE_URL");
        assert_eq!(RequiredKey::ServiceKey.env_var(), "SUPABASE_SERVICE_KEY");
        assert_eq!(RequiredKey::AnonKey.env_var(), "SUPABASE_ANON_KEY");
    }

    #[test]
    fn test_from_env_var() {
        assert_eq!(RequiredKey::from_env_var("SUPABASE_ANON_KEY"), Some(RequiredKey::AnonKey));
        assert_eq!(RequiredKey::from_env_var("supabase_url"), None);
        assert_eq!(RequiredKey::from_env_var("OTHER"), None);
    }

    #[test]
    fn test_secret_flags() {
        assert!(!RequiredKey::BaseUrl.is_secret());
        assert!(RequiredKey::ServiceKey.is_secret());
        assert!(RequiredKey::AnonKey.is_secret());
    }

    #[test]
    fn test_display_uses_env_var() {
        assert_eq!(RequiredKey::ServiceKey.to_string(), "SUPABASE_SERVICE_KEY");
    }
}
