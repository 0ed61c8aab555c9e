//! Environment configuration for the application
//!
//! This crate handles parsing, validation, and process-wide provisioning of the
//! environment configuration from per-target YAML files and environment
//! variables.

pub mod loader;
pub mod provider;
pub mod schema;
pub mod validation;

pub use loader::ConfigLoader;
pub use provider::EnvironmentProvider;
pub use schema::*;
pub use validation::*;
