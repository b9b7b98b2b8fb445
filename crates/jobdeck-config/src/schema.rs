//! Configuration schema.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Remote scheduler API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Query and pagination settings.
    #[serde(default)]
    pub query: QueryConfig,
}

/// Remote scheduler API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the scheduler API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Query and pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Page size when the location specifies none.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Hard upper bound on page size.
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,

    /// Entity-type selector parameter key.
    #[serde(default = "default_entity_param")]
    pub entity_param: String,

    /// Default entity type shown on first load.
    #[serde(default = "default_entity_type")]
    pub default_entity_type: String,

    /// Search debounce window in milliseconds. A responsiveness tunable,
    /// not a correctness requirement.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            entity_param: default_entity_param(),
            default_entity_type: default_entity_type(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl QueryConfig {
    /// The configured debounce window, ready to hand to a debouncer.
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_limit() -> u32 {
    20
}

fn default_max_limit() -> u32 {
    100
}

fn default_entity_param() -> String {
    "jobType".to_string()
}

fn default_entity_type() -> String {
    "scheduledJobs".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

impl DashboardConfig {
    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Invalid(format!("api.base_url is not a valid URL: {e}"))
        })?;
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_seconds must be at least 1".to_string(),
            ));
        }
        if self.query.default_limit == 0 {
            return Err(ConfigError::Invalid(
                "query.default_limit must be at least 1".to_string(),
            ));
        }
        if self.query.max_limit > 100 {
            return Err(ConfigError::Invalid(
                "query.max_limit must not exceed 100".to_string(),
            ));
        }
        if self.query.default_limit > self.query.max_limit {
            return Err(ConfigError::Invalid(
                "query.default_limit must not exceed query.max_limit".to_string(),
            ));
        }
        if self.query.entity_param.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "query.entity_param must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.query.default_limit, 20);
        assert_eq!(config.query.max_limit, 100);
        assert_eq!(config.query.entity_param, "jobType");
        assert_eq!(config.query.debounce_ms, 300);
    }

    #[test]
    fn test_debounce_window_from_millis() {
        let config = DashboardConfig::default();
        assert_eq!(config.query.debounce_window(), Duration::from_millis(300));
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = DashboardConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_limit_above_max_rejected() {
        let mut config = DashboardConfig::default();
        config.query.default_limit = 50;
        config.query.max_limit = 25;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_limit_capped_at_100() {
        let mut config = DashboardConfig::default();
        config.query.max_limit = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = DashboardConfig::default();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
