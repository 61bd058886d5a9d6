//! redscope configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use redscope_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config.backend.ask_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{Environment, RedscopeConfig};

use redscope_common::ConfigError;
use std::path::Path;

/// Environment variable that selects the backend deployment.
pub const ENV_VAR: &str = "REDSCOPE_ENV";

/// Load config from `path`, or from the platform default path when `None`.
///
/// `REDSCOPE_ENV` is applied on top of the file before validation.
pub fn load_config(path: Option<&Path>) -> Result<RedscopeConfig, ConfigError> {
    let mut config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    if let Ok(value) = std::env::var(ENV_VAR) {
        apply_environment_override(&mut config, &value)?;
    }

    validation::validate(&config)?;
    Ok(config)
}

/// Force the backend environment from a string such as `"development"`.
pub fn apply_environment_override(
    config: &mut RedscopeConfig,
    value: &str,
) -> Result<(), ConfigError> {
    let env: Environment = value.parse().map_err(ConfigError::ValidationError)?;
    if env != config.backend.environment {
        tracing::info!("backend environment overridden to {env}");
    }
    config.backend.environment = env;
    Ok(())
}
