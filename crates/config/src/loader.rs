//! Configuration loader implementation

use crate::schema::EnvironmentConfig;
use crate::validation::ConfigValidator;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use std::path::Path;
use types::{ConfigError, DeployTarget, Result};

/// Configuration loader that handles per-target YAML files and environment
/// variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file and environment variables
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<EnvironmentConfig> {
        let config = Self::load_raw(config_path)?;
        Self::check(&config)?;
        Ok(config)
    }

    /// Load without field validation, for tooling that wants the full
    /// validation report instead of the first error
    pub fn load_raw<P: AsRef<Path>>(config_path: P) -> Result<EnvironmentConfig> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Err(ConfigError::FileNotFound {
                path: config_path.display().to_string(),
            });
        }

        Figment::new()
            // Start with the per-target YAML file
            .merge(Yaml::file(config_path))
            // Override with environment variables (APPENV_ prefix, __ nesting),
            // e.g. APPENV_API_BASE_URL, APPENV_IDENTITY_PROVIDER__CLIENT_ID
            .merge(Env::prefixed("APPENV_").split("__"))
            .extract()
            .map_err(map_figment_error)
    }

    /// Load the configuration file for a deployment target
    ///
    /// Resolves `<config_dir>/<target>.yaml` and rejects a file whose declared
    /// target does not match the requested one, so values can never leak
    /// across targets.
    pub fn load_target<P: AsRef<Path>>(
        config_dir: P,
        target: DeployTarget,
    ) -> Result<EnvironmentConfig> {
        let config = Self::load_target_raw(config_dir, target)?;
        Self::check(&config)?;
        Ok(config)
    }

    /// Per-target variant of `load_raw`, still enforcing the target match
    pub fn load_target_raw<P: AsRef<Path>>(
        config_dir: P,
        target: DeployTarget,
    ) -> Result<EnvironmentConfig> {
        let path = config_dir.as_ref().join(format!("{}.yaml", target.as_str()));
        let config = Self::load_raw(&path)?;

        if config.target != target {
            return Err(ConfigError::TargetMismatch {
                requested: target.to_string(),
                found: config.target.to_string(),
            });
        }

        Ok(config)
    }

    /// Load configuration from a string (for testing)
    pub fn load_from_str(yaml_content: &str) -> Result<EnvironmentConfig> {
        let config: EnvironmentConfig = Figment::new()
            .merge(Yaml::string(yaml_content))
            .extract()
            .map_err(map_figment_error)?;

        Self::check(&config)?;
        Ok(config)
    }

    /// Write example configuration files for both deployment targets
    pub fn write_example<P: AsRef<Path>>(config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        std::fs::create_dir_all(config_dir)?;

        for config in [
            EnvironmentConfig::development_example(),
            EnvironmentConfig::production_example(),
        ] {
            let yaml_content = serde_yaml::to_string(&config)
                .map_err(|e| ConfigError::Parse(e.to_string()))?;
            let path = config_dir.join(format!("{}.yaml", config.target.as_str()));
            std::fs::write(path, yaml_content)?;
        }

        Ok(())
    }

    /// Fail fast on the first validation error
    fn check(config: &EnvironmentConfig) -> Result<()> {
        ConfigValidator::validate(config).into_result()
    }
}

/// Map a figment extraction error onto the configuration error taxonomy,
/// keeping the missing-field path intact
fn map_figment_error(err: figment::Error) -> ConfigError {
    match &err.kind {
        figment::error::Kind::MissingField(name) => {
            let field = if err.path.is_empty() {
                name.to_string()
            } else {
                format!("{}.{}", err.path.join("."), name)
            };
            ConfigError::MissingField { field }
        }
        _ => ConfigError::Parse(err.to_string()),
    }
}
