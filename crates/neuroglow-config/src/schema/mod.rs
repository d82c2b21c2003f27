//! Configuration schema.
//!
//! Every field defaults to the values the background was designed with,
//! so an empty file (or no file at all) reproduces the stock look.

mod animation;
mod renderer;
mod scene;
mod window;

pub use animation::*;
pub use renderer::*;
pub use scene::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuroglowConfig {
    pub scene: SceneConfig,
    pub animation: AnimationConfig,
    pub renderer: RendererConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
