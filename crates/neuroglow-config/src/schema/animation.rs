//! Animation loop settings.

use serde::{Deserialize, Serialize};

/// Frame throttle and per-frame rotation increments (radians).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub target_fps: f64,
    pub mesh_rotation_y: f64,
    pub mesh_rotation_z: f64,
    pub cloud_rotation_y: f64,
}

impl AnimationConfig {
    /// Minimum gap between processed frames, in milliseconds.
    pub fn throttle_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target_fps: 30.0,
            mesh_rotation_y: 0.002,
            mesh_rotation_z: 0.001,
            cloud_rotation_y: 0.001,
        }
    }
}
