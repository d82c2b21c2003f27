//! Phong-style surface parameters for the brain mesh.

use neuroglow_common::Color;

/// Fixed shading parameters of the brain surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrainMaterial {
    pub color: Color,
    pub emissive: Color,
    pub specular: Color,
    pub shininess: f32,
    pub opacity: f32,
}

impl Default for BrainMaterial {
    fn default() -> Self {
        Self {
            color: Color::from_rgba(0xcc, 0x00, 0xff, 255),
            emissive: Color::from_rgba(0x77, 0x00, 0x99, 255),
            specular: Color::from_rgba(0xff, 0xff, 0xff, 255),
            shininess: 80.0,
            opacity: 0.85,
        }
    }
}
