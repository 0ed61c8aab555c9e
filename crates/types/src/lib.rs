//! Shared types for the environment configuration provider
//!
//! This crate contains the error taxonomy, the deployment target enum, and
//! small validation helpers used across the workspace.

pub mod error;
pub mod target;
pub mod utils;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use target::DeployTarget;
