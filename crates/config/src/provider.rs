//! Process-wide configuration provider
//!
//! The configuration is installed exactly once at startup and shared read-only
//! afterwards. `OnceLock` provides the happens-before edge, so any number of
//! threads can read the value without further synchronization.

use crate::schema::EnvironmentConfig;
use std::sync::{Arc, OnceLock};
use types::{ConfigError, Result};

static GLOBAL: OnceLock<EnvironmentConfig> = OnceLock::new();

/// Install the process-wide environment configuration
///
/// Returns `ConfigError::AlreadyInitialized` on a second call; the first
/// installed value always wins.
pub fn init(config: EnvironmentConfig) -> Result<&'static EnvironmentConfig> {
    if GLOBAL.set(config).is_err() {
        return Err(ConfigError::AlreadyInitialized);
    }

    Ok(get())
}

/// Get the process-wide environment configuration
///
/// Returns the same fully populated instance on every call within the process.
///
/// # Panics
///
/// Panics if `init` has not run. Reading the configuration before startup
/// initialization is a startup-ordering bug, not a runtime condition.
pub fn get() -> &'static EnvironmentConfig {
    GLOBAL
        .get()
        .expect("environment configuration read before provider::init")
}

/// Non-panicking probe for the process-wide configuration
pub fn try_get() -> Option<&'static EnvironmentConfig> {
    GLOBAL.get()
}

/// Injectable configuration handle
///
/// Tests and consumers that prefer constructor injection over the process-wide
/// accessor hold one of these; clones share the same immutable value.
#[derive(Debug, Clone)]
pub struct EnvironmentProvider {
    config: Arc<EnvironmentConfig>,
}

impl EnvironmentProvider {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn get(&self) -> &EnvironmentConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test for the global accessor: the OnceLock is process-wide state,
    // so init/get/double-init are exercised together.
    #[test]
    fn test_global_init_and_get() {
        assert!(try_get().is_none());

        let installed = init(EnvironmentConfig::development_example()).unwrap();
        assert!(!installed.is_production());

        let first = get();
        let second = get();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);

        let err = init(EnvironmentConfig::production_example()).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyInitialized));
        // The first installed value wins
        assert!(!get().is_production());
    }

    #[test]
    fn test_injectable_provider() {
        let provider = EnvironmentProvider::new(EnvironmentConfig::production_example());
        let clone = provider.clone();

        assert!(provider.get().is_production());
        assert_eq!(provider.get(), clone.get());
        assert!(std::ptr::eq(provider.get(), clone.get()));
    }
}
