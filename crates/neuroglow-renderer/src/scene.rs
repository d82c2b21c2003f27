//! Scene assembly: everything generated once at startup.

use neuroglow_common::Color;
use neuroglow_config::schema::SceneConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::AnimationState;
use crate::brain::{BrainMaterial, BrainMesh};
use crate::camera::PerspectiveCamera;
use crate::lights::SceneLights;
use crate::math::matrix::{self as mat, Mat4};
use crate::particles::ParticleCloud;
use crate::synapses::{generate_connections, line_segments, Connection, LineSegment};

/// Default clear color, a near-black blue.
pub const DEFAULT_CLEAR_COLOR: Color = Color {
    r: 0x05,
    g: 0x05,
    b: 0x10,
    a: 0xff,
};

/// CPU-side scene: camera, geometry, lights, and materials.
///
/// Geometry is immutable after `build`; only the camera aspect changes.
#[derive(Debug, Clone)]
pub struct BrainScene {
    pub camera: PerspectiveCamera,
    pub mesh: BrainMesh,
    pub material: BrainMaterial,
    pub cloud: ParticleCloud,
    pub connections: Vec<Connection>,
    pub segments: Vec<LineSegment>,
    pub lights: SceneLights,
    pub clear_color: Color,
}

impl BrainScene {
    /// Generate the scene. Mesh first, then particles, then connections,
    /// all from the same `rng`.
    pub fn build<R: Rng + ?Sized>(
        config: &SceneConfig,
        clear_color: Color,
        aspect: f64,
        rng: &mut R,
    ) -> Self {
        let mesh = BrainMesh::generate(
            config.mesh_radius as f32,
            config.mesh_detail,
            config.displacement as f32,
        );
        let cloud = ParticleCloud::generate(config.particle_count as usize, rng);
        let connections = generate_connections(
            &cloud,
            config.connection_count as usize,
            config.cross_hemisphere_bias,
            rng,
        );
        let segments = line_segments(&cloud, &connections);

        tracing::info!(
            vertices = mesh.vertex_count(),
            particles = cloud.len(),
            connections = connections.len(),
            "Brain scene built"
        );

        Self {
            camera: PerspectiveCamera::new(aspect),
            mesh,
            material: BrainMaterial::default(),
            cloud,
            connections,
            segments,
            lights: SceneLights::default(),
            clear_color,
        }
    }

    /// Update the camera for a new viewport size (CSS or logical pixels).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    /// Clear color as wgpu expects it for the given target.
    pub fn clear_color_for(&self, srgb_target: bool) -> wgpu::Color {
        let [r, g, b] = crate::gpu::encode_rgb(self.clear_color, srgb_target);
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }
}

/// Mesh model matrix: y then z rotation, applied as `Ry · Rz`.
pub fn mesh_model(state: &AnimationState) -> Mat4 {
    mat::mul(
        &mat::rotate_y(state.mesh_rotation_y as f32),
        &mat::rotate_z(state.mesh_rotation_z as f32),
    )
}

/// Particle cloud model matrix.
pub fn cloud_model(state: &AnimationState) -> Mat4 {
    mat::rotate_y(state.cloud_rotation_y as f32)
}

/// Seeded RNG for reproducible layouts, OS entropy otherwise.
pub fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parse a hex clear color, falling back to the default on bad input.
pub fn parse_clear_color(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!(hex, "Invalid clear color, using default");
        DEFAULT_CLEAR_COLOR
    })
}

// =============================================================================
// Tests
// =============================================================================
