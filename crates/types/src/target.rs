//! Deployment target selection

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment target for the running application
///
/// Exactly one target is selected at startup and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    /// Local development against a locally running backend
    #[default]
    Development,
    /// Production deployment
    Production,
}

impl DeployTarget {
    /// Whether this target selects production behavior in consuming code
    pub fn is_production(&self) -> bool {
        matches!(self, DeployTarget::Production)
    }

    /// Get target as string
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployTarget::Development => "development",
            DeployTarget::Production => "production",
        }
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(DeployTarget::Development),
            "production" | "prod" => Ok(DeployTarget::Production),
            other => Err(ConfigError::InvalidValue {
                field: "target".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
