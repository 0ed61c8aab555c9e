//! Configuration validation

use crate::schema::{EnvironmentConfig, IdentityProviderConfig};
use types::{utils, ConfigError, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete environment configuration
    pub fn validate(config: &EnvironmentConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::validate_api(config, &mut report);
        Self::validate_identity_provider(&config.identity_provider, &mut report);
        Self::validate_logging(config, &mut report);
        Self::validate_target_consistency(config, &mut report);

        report
    }

    fn validate_api(config: &EnvironmentConfig, report: &mut ValidationReport) {
        if config.api_base_url.is_empty() {
            report.add_error("api_base_url", "API base URL cannot be empty");
        } else if !utils::is_absolute_http_url(&config.api_base_url) {
            report.add_error(
                "api_base_url",
                &format!(
                    "API base URL must be an absolute http(s) URL: {}",
                    config.api_base_url
                ),
            );
        }
    }

    fn validate_identity_provider(idp: &IdentityProviderConfig, report: &mut ValidationReport) {
        if idp.domain_prefix.is_empty() {
            report.add_error("identity_provider.domain_prefix", "Domain prefix cannot be empty");
        } else if !utils::is_valid_domain_prefix(&idp.domain_prefix) {
            report.add_error(
                "identity_provider.domain_prefix",
                &format!(
                    "Domain prefix must be a bare hostname without scheme or path: {}",
                    idp.domain_prefix
                ),
            );
        }

        if idp.audience.is_empty() {
            report.add_error("identity_provider.audience", "Audience cannot be empty");
        }

        if idp.client_id.is_empty() {
            report.add_error("identity_provider.client_id", "Client ID cannot be empty");
        } else if idp.client_id.starts_with("REPLACE") || idp.client_id == "changeme" {
            report.add_warning(
                "identity_provider.client_id",
                "Client ID looks like a placeholder, the login flow will not work",
            );
        }

        if idp.callback_url.is_empty() {
            report.add_error("identity_provider.callback_url", "Callback URL cannot be empty");
        } else if !utils::is_absolute_http_url(&idp.callback_url) {
            report.add_error(
                "identity_provider.callback_url",
                &format!(
                    "Callback URL must be an absolute http(s) URL: {}",
                    idp.callback_url
                ),
            );
        }
    }

    fn validate_logging(config: &EnvironmentConfig, report: &mut ValidationReport) {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            report.add_error(
                "logging.level",
                &format!(
                    "Invalid log level: {}. Valid levels: {:?}",
                    config.logging.level, valid_log_levels
                ),
            );
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            report.add_error(
                "logging.format",
                &format!(
                    "Invalid log format: {}. Valid formats: {:?}",
                    config.logging.format, valid_log_formats
                ),
            );
        }
    }

    fn validate_target_consistency(config: &EnvironmentConfig, report: &mut ValidationReport) {
        if !config.is_production() {
            return;
        }

        if config.api_base_url.starts_with("http://") {
            report.add_warning(
                "api_base_url",
                "Production API base URL uses plain http",
            );
        }

        if utils::is_loopback_url(&config.identity_provider.callback_url) {
            report.add_warning(
                "identity_provider.callback_url",
                "Production callback URL points at a loopback host",
            );
        }
    }
}

/// Validation report containing errors and warnings
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

/// A validation issue (error or warning)
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn summary(&self) -> String {
        format!(
            "Validation: {} errors, {} warnings",
            self.errors.len(),
            self.warnings.len()
        )
    }

    /// Turn the first error into a fail-fast configuration error
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(issue) => Err(ConfigError::ValidationError {
                field: issue.field,
                message: issue.message,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LoggingConfig;
    use types::DeployTarget;

    fn valid_config() -> EnvironmentConfig {
        EnvironmentConfig {
            target: DeployTarget::Development,
            api_base_url: "http://127.0.0.1:5000".to_string(),
            identity_provider: IdentityProviderConfig {
                domain_prefix: "example.auth0.com".to_string(),
                audience: "MyApi".to_string(),
                client_id: "abc123".to_string(),
                callback_url: "http://localhost:8100".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let report = ConfigValidator::validate(&valid_config());
        assert!(report.is_valid());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_empty_fields_are_errors() {
        let mut config = valid_config();
        config.identity_provider.audience.clear();
        config.identity_provider.client_id.clear();

        let report = ConfigValidator::validate(&config);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors.iter().any(|i| i.field == "identity_provider.audience"));
    }

    #[test]
    fn test_domain_prefix_with_scheme_is_error() {
        let mut config = valid_config();
        config.identity_provider.domain_prefix = "https://example.auth0.com".to_string();

        let report = ConfigValidator::validate(&config);
        assert!(report.has_errors());
    }

    #[test]
    fn test_invalid_log_level_is_error() {
        let mut config = valid_config();
        config.logging.level = "verbose".to_string();

        let report = ConfigValidator::validate(&config);
        assert!(report.errors.iter().any(|i| i.field == "logging.level"));
    }

    #[test]
    fn test_production_loopback_callback_warns() {
        let mut config = valid_config();
        config.target = DeployTarget::Production;
        config.api_base_url = "https://api.example.com".to_string();

        let report = ConfigValidator::validate(&config);
        assert!(report.is_valid());
        assert!(report
            .warnings
            .iter()
            .any(|i| i.field == "identity_provider.callback_url"));
    }

    #[test]
    fn test_production_plain_http_api_warns() {
        let mut config = valid_config();
        config.target = DeployTarget::Production;

        let report = ConfigValidator::validate(&config);
        assert!(report.warnings.iter().any(|i| i.field == "api_base_url"));
    }

    #[test]
    fn test_into_result_surfaces_first_error() {
        let mut config = valid_config();
        config.api_base_url = "not a url".to_string();

        let err = ConfigValidator::validate(&config).into_result().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
