//! Runtime configuration for the user API client. The base URL comes from
//! `UZANTO_API_URL` (or `--api-url` on the CLI) and falls back to the local
//! development default. Configuration values are public; do not store
//! secrets here.

use std::env;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const API_URL_ENV: &str = "UZANTO_API_URL";

/// Explicit configuration for the user API client, built once at startup and
/// handed to whatever constructs the client.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Builds the config from the given base URL. The value is trimmed; a
    /// blank value counts as unset and falls back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = normalize_base_url(&base_url.into())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { base_url }
    }

    /// Loads the base URL from the environment and applies the default when
    /// the variable is unset, empty, or whitespace-only.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var(API_URL_ENV).unwrap_or_default())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_and_rejects_empty() {
        assert_eq!(normalize_base_url(""), None);
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(
            normalize_base_url("  https://users.example.com/api "),
            Some("https://users.example.com/api".to_string())
        );
    }

    #[test]
    fn default_points_at_local_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn new_treats_blank_as_unset() {
        assert_eq!(ApiConfig::new("").base_url, DEFAULT_API_URL);
        assert_eq!(ApiConfig::new("   ").base_url, DEFAULT_API_URL);
    }

    #[test]
    fn new_trims_the_value() {
        let config = ApiConfig::new(" https://users.example.com/api ");
        assert_eq!(config.base_url, "https://users.example.com/api");
    }

    #[test]
    fn from_env_prefers_configured_value() {
        temp_env::with_var(
            API_URL_ENV,
            Some("https://users.example.com/api"),
            || {
                let config = ApiConfig::from_env();
                assert_eq!(config.base_url, "https://users.example.com/api");
            },
        );
    }

    #[test]
    fn from_env_falls_back_when_unset() {
        temp_env::with_var(API_URL_ENV, None::<&str>, || {
            let config = ApiConfig::from_env();
            assert_eq!(config.base_url, DEFAULT_API_URL);
        });
    }

    #[test]
    fn from_env_treats_blank_as_unset() {
        temp_env::with_var(API_URL_ENV, Some("   "), || {
            let config = ApiConfig::from_env();
            assert_eq!(config.base_url, DEFAULT_API_URL);
        });
    }
}
