//! Configuration for the person API client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{PersonApiError, PersonApiResult};

/// Default SWAPI people endpoint.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/people/";

/// Configuration for [`crate::SwapiClient`] and [`crate::PersonFetcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonApiConfig {
    /// People endpoint; the person id is appended as the last path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("startrivia/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for PersonApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            user_agent: default_user_agent()
        }
    }
}

impl PersonApiConfig {
    /// Creates a new configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SWAPI_PEOPLE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_base_url);

        Self {
            base_url: normalize_base_url(&base_url),
            timeout_seconds: std::env::var("SWAPI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
            user_agent: std::env::var("SWAPI_USER_AGENT").unwrap_or_else(|_| default_user_agent())
        }
    }

    /// Creates a builder for configuration.
    #[must_use]
    pub fn builder() -> PersonApiConfigBuilder {
        PersonApiConfigBuilder::default()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Builder for `PersonApiConfig`.
#[derive(Default)]
pub struct PersonApiConfigBuilder {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
    user_agent: Option<String>
}

impl PersonApiConfigBuilder {
    /// Sets the people endpoint.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> PersonApiResult<PersonApiConfig> {
        let base_url = self.base_url.unwrap_or_else(default_base_url);
        if base_url.trim().is_empty() {
            return Err(PersonApiError::Configuration(
                "base_url must not be empty".to_string()
            ));
        }

        Ok(PersonApiConfig {
            base_url: normalize_base_url(&base_url),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent)
        })
    }
}

/// Trims whitespace and ensures exactly one trailing slash.
pub fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PersonApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, None);
        assert!(config.timeout().is_none());
        assert!(config.user_agent.starts_with("startrivia/"));
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let config = PersonApiConfig::builder()
            .base_url("http://localhost:8080/api/people")
            .timeout_seconds(5)
            .build()
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api/people/");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));

        let config = PersonApiConfig::builder()
            .base_url("http://localhost:8080/people//")
            .build()
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/people/");
    }

    #[test]
    fn test_builder_rejects_empty_base_url() {
        let result = PersonApiConfig::builder().base_url("   ").build();
        assert!(matches!(result, Err(PersonApiError::Configuration(_))));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: PersonApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PersonApiConfig::default());

        let config: PersonApiConfig =
            serde_json::from_str(r#"{"base_url": "http://x/people/", "timeout_seconds": 3}"#)
                .unwrap();
        assert_eq!(config.base_url, "http://x/people/");
        assert_eq!(config.timeout_seconds, Some(3));
    }
}
