//! envctl - operator CLI for the environment configuration
//!
//! Loads, validates, and prints the per-target environment configuration used
//! by the application. The application itself installs the configuration
//! through `config::provider` at startup; this binary is the out-of-band
//! check.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{ConfigLoader, ConfigValidator, EnvironmentConfig};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use types::{utils, DeployTarget};

#[derive(Parser)]
#[command(name = "envctl", version, about = "Inspect and validate environment configuration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a deployment target's configuration and print the full validation
    /// report
    Validate {
        /// Directory holding the per-target YAML files
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,
        /// Deployment target (defaults to $APP_TARGET, then development)
        #[arg(long)]
        target: Option<DeployTarget>,
    },
    /// Print the fully resolved configuration for a deployment target
    Show {
        /// Directory holding the per-target YAML files
        #[arg(long, default_value = "config")]
        config_dir: PathBuf,
        /// Deployment target (defaults to $APP_TARGET, then development)
        #[arg(long)]
        target: Option<DeployTarget>,
        /// Emit the configuration as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write example configuration files for both deployment targets
    Init {
        /// Directory to write the example files into
        #[arg(long, default_value = "config")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env before logging init so RUST_LOG/LOG_FORMAT from the file
    // apply, but hold any failure until a subscriber is installed
    let dotenv_result = dotenv::dotenv();

    init_logging()?;

    if let Err(e) = dotenv_result {
        if let Some(message) = dotenv_warning(&e.to_string()) {
            warn!("{message}");
        }
    }

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { config_dir, target } => {
            let target = resolve_target(target)?;
            validate(&config_dir, target)
        }
        Command::Show {
            config_dir,
            target,
            json,
        } => {
            let target = resolve_target(target)?;
            let config = ConfigLoader::load_target(&config_dir, target)
                .context("Failed to load configuration")?;
            show(&config, json)
        }
        Command::Init { dir } => {
            ConfigLoader::write_example(&dir).context("Failed to write example configuration")?;
            info!("Example configuration written to {}", dir.display());
            Ok(())
        }
    }
}

fn validate(config_dir: &Path, target: DeployTarget) -> Result<()> {
    let config = ConfigLoader::load_target_raw(config_dir, target)
        .context("Failed to load configuration")?;

    let report = ConfigValidator::validate(&config);
    for issue in &report.errors {
        error!("{}: {}", issue.field, issue.message);
    }
    for issue in &report.warnings {
        warn!("{}: {}", issue.field, issue.message);
    }
    info!("{}", report.summary());

    if report.has_errors() {
        anyhow::bail!("configuration for target '{target}' is invalid");
    }

    info!("Configuration for target '{}' is valid", target);
    Ok(())
}

fn show(config: &EnvironmentConfig, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")?
        );
        return Ok(());
    }

    info!("Target: {}", config.target);
    info!("Production: {}", config.is_production());
    info!("API base URL: {}", config.api_base_url);
    info!("Identity provider: {}", config.identity_provider.domain_prefix);
    info!("Audience: {}", config.identity_provider.audience);
    // Client IDs stay out of shared log streams
    info!(
        "Client ID: {}",
        utils::sanitize_for_logging(&config.identity_provider.client_id)
    );
    info!("Callback URL: {}", config.identity_provider.callback_url);
    Ok(())
}

/// Warning text for a failed `.env` load; a missing file is the normal case
/// and stays quiet
fn dotenv_warning(message: &str) -> Option<String> {
    if message.contains("No such file or directory") {
        return None;
    }

    Some(format!("Could not load .env file: {message}"))
}

/// Resolve the deployment target: CLI flag, then $APP_TARGET, then development
fn resolve_target(flag: Option<DeployTarget>) -> Result<DeployTarget> {
    if let Some(target) = flag {
        return Ok(target);
    }

    match env::var("APP_TARGET") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Invalid APP_TARGET: {value}")),
        Err(_) => Ok(DeployTarget::default()),
    }
}

/// Initialize logging based on environment variables
fn init_logging() -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
    }

    Ok(())
}
