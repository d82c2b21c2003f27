//! Particle cloud generation.
//!
//! Positions are drawn in spherical coordinates with a uniform sampling
//! radius, then the x axis is squeezed near the center and stretched
//! outside it so the cloud thins out between the two hemispheres.

use std::f64::consts::TAU;

use neuroglow_common::types::hsl_to_rgb;
use rand::Rng;

use super::types::{Particle, ParticleInstance};

pub const MIN_RADIUS: f64 = 1.5;
pub const RADIUS_SPAN: f64 = 2.5;
pub const MIN_SIZE: f64 = 0.05;
pub const SIZE_SPAN: f64 = 0.15;

/// Below this |x| a particle is pulled toward the midplane.
const CENTER_BAND: f64 = 1.0;
const CENTER_SQUEEZE: f64 = 0.5;
const SIDE_STRETCH: f64 = 1.2;

/// The fixed set of particles generated at startup.
#[derive(Debug, Clone)]
pub struct ParticleCloud {
    pub particles: Vec<Particle>,
}

impl ParticleCloud {
    /// Generate `count` particles. Draw order per particle is radius,
    /// theta, phi, hue, lightness, size.
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| sample_particle(rng)).collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        self.particles.get(index).map(|p| p.position)
    }

    /// GPU instances for the sprite pipeline, colors as given.
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles
            .iter()
            .map(|p| ParticleInstance {
                position: p.position,
                size: p.size,
                color: p.color,
            })
            .collect()
    }
}

fn sample_particle<R: Rng + ?Sized>(rng: &mut R) -> Particle {
    let radius = RADIUS_SPAN * rng.gen::<f64>() + MIN_RADIUS;
    let theta = rng.gen::<f64>() * TAU;
    let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();

    let x = bias_x(radius * phi.sin() * theta.cos());
    let y = radius * phi.sin() * theta.sin();
    let z = radius * phi.cos();

    let hue = 0.75 + rng.gen::<f64>() * 0.1;
    let lightness = 0.7 + rng.gen::<f64>() * 0.3;
    let color = hsl_to_rgb(hue as f32, 1.0, lightness as f32);

    let size = rng.gen::<f64>() * SIZE_SPAN + MIN_SIZE;

    Particle {
        position: [x as f32, y as f32, z as f32],
        color,
        size: size as f32,
        radius: radius as f32,
    }
}

fn bias_x(x: f64) -> f64 {
    if x.abs() < CENTER_BAND {
        x * CENTER_SQUEEZE
    } else {
        x * SIDE_STRETCH
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cloud(seed: u64) -> ParticleCloud {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleCloud::generate(1000, &mut rng)
    }

    #[test]
    fn generates_requested_count() {
        assert_eq!(cloud(1).len(), 1000);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(ParticleCloud::generate(0, &mut rng).is_empty());
    }

    #[test]
    fn sampling_radius_within_bounds() {
        for p in &cloud(7).particles {
            assert!((1.5..=4.0).contains(&p.radius), "radius {}", p.radius);
        }
    }

    #[test]
    fn y_and_z_stay_inside_sampling_sphere() {
        for p in &cloud(11).particles {
            let [_, y, z] = p.position;
            assert!((y * y + z * z).sqrt() <= p.radius + 1e-4);
        }
    }

    #[test]
    fn x_bias_leaves_no_particle_in_the_gap() {
        // |x| < 1 is halved to < 0.5; |x| >= 1 is stretched to >= 1.2.
        for p in &cloud(3).particles {
            let ax = p.position[0].abs();
            assert!(ax < 0.5 + 1e-5 || ax >= 1.2 - 1e-5, "x = {}", p.position[0]);
        }
    }

    #[test]
    fn sizes_within_bounds() {
        for p in &cloud(5).particles {
            assert!((0.05..=0.2).contains(&p.size), "size {}", p.size);
        }
    }

    #[test]
    fn colors_in_purple_blue_band() {
        for p in &cloud(9).particles {
            let [r, g, b] = p.color;
            for c in p.color {
                assert!((-1e-6..=1.0 + 1e-6).contains(&c));
            }
            assert!(g <= r && g <= b, "green should be the weakest channel: {:?}", p.color);
            assert!(b > 0.85, "blue stays near full: {:?}", p.color);
        }
    }

    #[test]
    fn same_seed_same_cloud() {
        assert_eq!(cloud(42).particles, cloud(42).particles);
        assert_ne!(cloud(42).particles, cloud(43).particles);
    }

    #[test]
    fn instances_mirror_particles() {
        let c = cloud(2);
        let instances = c.instances();
        assert_eq!(instances.len(), c.len());
        assert_eq!(instances[10].position, c.particles[10].position);
        assert_eq!(instances[10].size, c.particles[10].size);
    }

    #[test]
    fn bias_x_squeezes_center_and_stretches_sides() {
        assert_eq!(bias_x(0.8), 0.4);
        assert_eq!(bias_x(-0.8), -0.4);
        assert!((bias_x(2.0) - 2.4).abs() < 1e-12);
        assert!((bias_x(-1.0) + 1.2).abs() < 1e-12);
    }
}
