//! Procedural scene generation settings.

use serde::{Deserialize, Serialize};

/// Mesh, particle, and connection generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub particle_count: u32,
    pub connection_count: u32,
    /// Probability that a connection is forced across the x = 0 plane.
    pub cross_hemisphere_bias: f64,
    pub mesh_radius: f64,
    /// Icosahedron subdivision level.
    pub mesh_detail: u32,
    /// Amplitude of the trigonometric surface displacement.
    pub displacement: f64,
    /// Fixed RNG seed; random layout when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 1000,
            connection_count: 50,
            cross_hemisphere_bias: 0.4,
            mesh_radius: 2.0,
            mesh_detail: 3,
            displacement: 0.15,
            seed: None,
        }
    }
}
