//! Neuroglow configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults
//! equal to the stock background, so partial configs work out of the box
//! and an absent file is not an error.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{NeuroglowConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use neuroglow_common::ConfigError;

/// Load config from `path` when given, otherwise from the platform default.
pub fn load_config(path: Option<&Path>) -> Result<NeuroglowConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &NeuroglowConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
