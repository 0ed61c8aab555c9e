//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use types::DeployTarget;

/// Environment configuration for one deployment target
///
/// Constructed once at startup and immutable afterwards. Consuming components
/// read `api_base_url` to build request targets and the identity-provider block
/// to drive the login redirect flow; none of that logic lives here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Deployment target this configuration belongs to
    #[serde(default)]
    pub target: DeployTarget,
    /// Base URL of the backend API
    pub api_base_url: String,
    /// Identity provider settings
    pub identity_provider: IdentityProviderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Identity provider configuration
///
/// All four fields are required. There are no serde defaults here: substituting
/// a default for `client_id`, `audience`, or `callback_url` would silently break
/// the login flow, so a missing field fails the load instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProviderConfig {
    /// Identity provider domain prefix (bare hostname, no scheme)
    pub domain_prefix: String,
    /// Audience identifier for the protected API
    pub audience: String,
    /// Public client identifier issued by the identity provider
    pub client_id: String,
    /// Redirect URL registered with the identity provider
    pub callback_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl EnvironmentConfig {
    /// Whether this configuration selects production behavior
    pub fn is_production(&self) -> bool {
        self.target.is_production()
    }

    /// Example configuration for local development
    pub fn development_example() -> Self {
        Self {
            target: DeployTarget::Development,
            api_base_url: "http://127.0.0.1:5000".to_string(),
            identity_provider: IdentityProviderConfig {
                domain_prefix: "example.auth0.com".to_string(),
                audience: "MyApi".to_string(),
                client_id: "REPLACE_WITH_CLIENT_ID".to_string(),
                callback_url: "http://localhost:8100".to_string(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: "pretty".to_string(),
            },
        }
    }

    /// Example configuration for production
    pub fn production_example() -> Self {
        Self {
            target: DeployTarget::Production,
            api_base_url: "https://api.example.com".to_string(),
            identity_provider: IdentityProviderConfig {
                domain_prefix: "example.auth0.com".to_string(),
                audience: "MyApi".to_string(),
                client_id: "REPLACE_WITH_CLIENT_ID".to_string(),
                callback_url: "https://app.example.com/callback".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_example() {
        let config = EnvironmentConfig::development_example();
        assert!(!config.is_production());
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_production_example() {
        let config = EnvironmentConfig::production_example();
        assert!(config.is_production());
        assert!(config.api_base_url.starts_with("https://"));
    }

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = EnvironmentConfig::production_example();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: EnvironmentConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
