//! Surface and GPU settings.

use serde::{Deserialize, Serialize};

/// Renderer settings shared by the native and browser hosts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Background clear color (hex).
    pub clear_color: String,
    /// Upper bound on the device pixel ratio used for the drawing buffer.
    pub max_pixel_ratio: f64,
    /// Prefer a discrete GPU.
    pub high_performance: bool,
    /// Id of the element the browser host mounts into.
    pub mount_element: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: "#050510".into(),
            max_pixel_ratio: 1.5,
            high_performance: true,
            mount_element: "brain-bg".into(),
        }
    }
}
