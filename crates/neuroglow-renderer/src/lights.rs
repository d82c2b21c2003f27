//! Scene lighting: one ambient term and three point lights.

use neuroglow_common::Color;

/// Index of the oscillating glow light in [`SceneLights::points`].
pub const GLOW_LIGHT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    /// Cutoff distance; the light contributes nothing beyond it.
    pub distance: f32,
    pub position: [f32; 3],
}

/// Ambient plus key, fill, and glow point lights.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLights {
    pub ambient: Color,
    pub points: [PointLight; 3],
}

impl Default for SceneLights {
    fn default() -> Self {
        Self {
            ambient: Color::from_rgba(0x33, 0x33, 0x33, 255),
            points: [
                PointLight {
                    color: Color::from_rgba(0xff, 0x00, 0xff, 255),
                    intensity: 2.0,
                    distance: 100.0,
                    position: [5.0, 5.0, 5.0],
                },
                PointLight {
                    color: Color::from_rgba(0x88, 0x00, 0xff, 255),
                    intensity: 2.0,
                    distance: 100.0,
                    position: [-5.0, -5.0, 5.0],
                },
                PointLight {
                    color: Color::from_rgba(0xaa, 0x00, 0xff, 255),
                    intensity: 1.5,
                    distance: 10.0,
                    position: [0.0, 0.0, 0.0],
                },
            ],
        }
    }
}

impl SceneLights {
    pub fn glow(&self) -> &PointLight {
        &self.points[GLOW_LIGHT]
    }
}
