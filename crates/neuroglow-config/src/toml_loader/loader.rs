//! Core TOML config loading: read from path or platform default.

use crate::schema::NeuroglowConfig;
use crate::validation;
use neuroglow_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. A config that parses but fails
/// validation is rejected with the collected validation errors.
pub fn load_from_path(path: &Path) -> Result<NeuroglowConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: NeuroglowConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/neuroglow/config.toml`
/// On Linux: `~/.config/neuroglow/config.toml`
///
/// If the file does not exist, writes the commented default template there
/// and returns defaults.
pub fn load_default() -> Result<NeuroglowConfig, ConfigError> {
    let path = match default_config_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("{e}; using built-in defaults");
            return Ok(NeuroglowConfig::default());
        }
    };
    load_or_create(&path)
}

/// Load `path`, creating it from the default template when missing.
///
/// Failing to write the template is logged; the defaults are still returned.
pub fn load_or_create(path: &Path) -> Result<NeuroglowConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            if let Err(e) = create_default_config(path) {
                warn!("{e}");
            }
            Ok(NeuroglowConfig::default())
        }
        Err(e) => Err(e),
    }
}
