//! GPU uniform buffer types shared across shader passes.
//!
//! `FrameUniforms` is the single per-frame block bound at group 0 by every
//! pipeline: camera matrices, viewport, the shader clock, and the lights.

use neuroglow_common::Color;

use crate::animation::AnimationState;
use crate::camera::PerspectiveCamera;
use crate::lights::{PointLight, SceneLights};

use super::types::PhysicalSize;

/// Shader time wraps after this many seconds. A multiple of 2π, so the
/// `sin(time + ...)` pulse has no visible seam at the wrap.
const SHADER_TIME_PERIOD: f64 = std::f64::consts::TAU * 1000.0;

/// One point light: xyz + cutoff distance, rgb + intensity.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl PointLightUniform {
    fn from_light(light: &PointLight, intensity: f32, srgb_target: bool) -> Self {
        let [r, g, b] = encode_rgb(light.color, srgb_target);
        Self {
            position: [
                light.position[0],
                light.position[1],
                light.position[2],
                light.distance,
            ],
            color: [r, g, b, intensity],
        }
    }
}

/// GPU-side uniform buffer matching the WGSL `Frame` struct.
///
/// Layout: 2 × mat4 + 3 × vec4 + 3 lights = 272 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view: [f32; 16],
    pub projection: [f32; 16],
    /// Camera world position (w unused).
    pub camera_position: [f32; 4],
    /// Drawing-buffer width, height, shader time in seconds, unused.
    pub viewport: [f32; 4],
    /// Ambient light rgb (a unused).
    pub ambient: [f32; 4],
    pub lights: [PointLightUniform; 3],
}

impl FrameUniforms {
    /// Assemble the per-frame block from the scene and the animation state.
    ///
    /// `srgb_target` selects whether colors are converted to linear space
    /// before upload.
    pub fn build(
        camera: &PerspectiveCamera,
        lights: &SceneLights,
        state: &AnimationState,
        size: PhysicalSize,
        srgb_target: bool,
    ) -> Self {
        let [ar, ag, ab] = encode_rgb(lights.ambient, srgb_target);
        let [key, fill, glow] = &lights.points;
        let eye = camera.position;

        Self {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            camera_position: [eye[0], eye[1], eye[2], 1.0],
            viewport: [
                size.width as f32,
                size.height as f32,
                wrap_shader_time(state.time_seconds),
                0.0,
            ],
            ambient: [ar, ag, ab, 1.0],
            lights: [
                PointLightUniform::from_light(key, key.intensity, srgb_target),
                PointLightUniform::from_light(fill, fill.intensity, srgb_target),
                PointLightUniform::from_light(glow, state.glow_intensity, srgb_target),
            ],
        }
    }
}

/// Reduce the shader clock into f32-friendly range.
pub fn wrap_shader_time(seconds: f64) -> f32 {
    seconds.rem_euclid(SHADER_TIME_PERIOD) as f32
}

/// `color` as the shader should receive it for the given target.
pub fn encode_rgb(color: Color, srgb_target: bool) -> [f32; 3] {
    if srgb_target {
        color.to_linear_rgb()
    } else {
        color.to_rgb_f32()
    }
}

/// sRGB float channels as the shader should receive them for the given
/// target.
pub fn encode_color(rgb: [f32; 3], srgb_target: bool) -> [f32; 3] {
    if srgb_target {
        rgb.map(neuroglow_common::types::srgb_to_linear)
    } else {
        rgb
    }
}

// =============================================================================
// Tests
// =============================================================================
