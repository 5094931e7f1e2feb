//! The validated configuration triple

use std::env;

use super::keys::RequiredKey;

/// Base URL plus both credential keys, all guaranteed non-empty
///
/// Only the resolver and `ResolvedConfig::new` construct this, so holding one
/// means every required key was found.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    url: String,
    service_key: String,
    anon_key: String,
}

impl ResolvedConfig {
    /// Build a config from explicit values
    ///
    /// Returns the keys whose values are empty if any are.
    pub fn new(
        url: impl Into<String>,
        service_key: impl Into<String>,
        anon_key: impl Into<String>,
    ) -> Result<Self, Vec<RequiredKey>> {
        let config = Self {
            url: url.into(),
            service_key: service_key.into(),
            anon_key: anon_key.into(),
        };

        let empty: Vec<RequiredKey> = RequiredKey::ALL
            .into_iter()
            .filter(|k| config.get(*k).is_empty())
            .collect();

        if empty.is_empty() {
            Ok(config)
        } else {
            Err(empty)
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn service_key(&self) -> &str {
        &self.service_key
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Value for a specific key
    pub fn get(&self, key: RequiredKey) -> &str {
        match key {
            RequiredKey::BaseUrl => &self.url,
            RequiredKey::ServiceKey => &self.service_key,
            RequiredKey::AnonKey => &self.anon_key,
        }
    }

    /// Copy the values into the process environment without overriding
    /// anything already set
    ///
    /// Only call during single-threaded startup: mutating the environment
    /// races with any concurrent reader.
    pub fn export_to_process_env(&self) {
        self.export_as(|key| key.env_var().to_string());
    }

    fn export_as(&self, var_name: impl Fn(RequiredKey) -> String) {
        for key in RequiredKey::ALL {
            let name = var_name(key);
            if env::var_os(&name).is_none() {
                env::set_var(&name, self.get(key));
            }
        }
    }
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("url", &self.url)
            .field("service_key", &"<redacted>")
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_complete_values() {
        let config = ResolvedConfig::new("https://x.supabase.co", "service", "anon").unwrap();
        assert_eq!(config.url(), "https://x.supabase.co");
        assert_eq!(config.get(RequiredKey::ServiceKey), "service");
        assert_eq!(config.get(RequiredKey::AnonKey), "anon");
    }

    #[test]
    fn test_new_rejects_empty_values() {
        let missing = ResolvedConfig::new("", "service", "").unwrap_err();
        assert_eq!(missing, vec![RequiredKey::BaseUrl, RequiredKey::AnonKey]);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = ResolvedConfig::new("https://x.supabase.co", "svc-secret", "anon-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("https://x.supabase.co"));
        assert!(!debug.contains("svc-secret"));
        assert!(!debug.contains("anon-secret"));
    }

    #[test]
    fn test_export_does_not_override() {
        let name = |key: RequiredKey| format!("{}_EXPORT_4821", key.env_var());
        env::set_var(name(RequiredKey::BaseUrl), "https://ambient.supabase.co");
        env::set_var(name(RequiredKey::AnonKey), "");

        let config = ResolvedConfig::new("https://file.supabase.co", "service", "anon").unwrap();
        config.export_as(name);

        assert_eq!(env::var(name(RequiredKey::BaseUrl)).unwrap(), "https://ambient.supabase.co");
        assert_eq!(env::var(name(RequiredKey::ServiceKey)).unwrap(), "service");
        assert_eq!(env::var(name(RequiredKey::AnonKey)).unwrap(), "");

        for key in RequiredKey::ALL {
            env::remove_var(name(key));
        }
    }
}
