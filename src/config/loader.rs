//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::FacadeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that replaces `upstream.base_url`.
pub const UPSTREAM_URL_ENV: &str = "EMPLOYEE_SERVICE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FacadeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content)?;
    finalize(config, std::env::var(UPSTREAM_URL_ENV).ok())
}

/// Load from `path` when given, otherwise start from defaults.
/// Environment overrides and validation apply in both cases.
pub fn load_or_default(path: Option<&Path>) -> Result<FacadeConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => finalize(
            FacadeConfig::default(),
            std::env::var(UPSTREAM_URL_ENV).ok(),
        ),
    }
}

/// Parse TOML text without validating it.
pub fn parse_config(content: &str) -> Result<FacadeConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

fn finalize(
    mut config: FacadeConfig,
    upstream_override: Option<String>,
) -> Result<FacadeConfig, ConfigError> {
    if let Some(url) = upstream_override.filter(|u| !u.trim().is_empty()) {
        tracing::debug!(base_url = %url, "Upstream URL overridden from environment");
        config.upstream.base_url = url;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
