//! Connection generation and the per-frame pulse.
//!
//! Each connection draws two uniform endpoints, then flips a biased coin.
//! On heads the second endpoint is redrawn until it lies on the other
//! side of the `x = 0` plane from the first.

use rand::Rng;

use super::types::{Connection, LineSegment, LineVertex};
use crate::particles::ParticleCloud;

const MIN_LIFE: f64 = 0.5;
const LIFE_SPAN: f64 = 0.5;
const MIN_SPEED: f64 = 0.01;
const SPEED_SPAN: f64 = 0.02;

/// Generate `count` connections over `cloud`.
///
/// `cross_bias` is the probability that a connection is forced across
/// hemispheres. If every particle shares one side, no connection can be
/// forced and the uniform draw is kept.
pub fn generate_connections<R: Rng + ?Sized>(
    cloud: &ParticleCloud,
    count: usize,
    cross_bias: f64,
    rng: &mut R,
) -> Vec<Connection> {
    let n = cloud.len();
    if n == 0 {
        return Vec::new();
    }

    let xs: Vec<f32> = cloud.particles.iter().map(|p| p.position[0]).collect();

    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..n);
            let drawn_end = rng.gen_range(0..n);

            let mut end = drawn_end;
            let mut cross_hemisphere = false;
            if rng.gen::<f64>() < cross_bias {
                let side = hemisphere(xs[start]);
                if xs.iter().any(|&x| hemisphere(x) != side) {
                    end = rng.gen_range(0..n);
                    while hemisphere(xs[end]) == side {
                        end = rng.gen_range(0..n);
                    }
                    cross_hemisphere = true;
                } else {
                    tracing::warn!(start, "No particle on the opposite side; keeping uniform endpoint");
                }
            }

            let life = rng.gen::<f64>() * LIFE_SPAN + MIN_LIFE;
            let speed = rng.gen::<f64>() * SPEED_SPAN + MIN_SPEED;

            Connection {
                start,
                end,
                life,
                speed,
                cross_hemisphere,
            }
        })
        .collect()
}

/// Raw connector opacity at `t_ms`: `0.2 + sin(t·speed)·0.3·life`.
///
/// The result dips below zero for large `life`; callers storing it as an
/// alpha clamp it first.
pub fn connection_opacity(t_ms: f64, speed: f64, life: f64) -> f64 {
    0.2 + (t_ms * speed).sin() * 0.3 * life
}

/// Sign of `x` as -1, 0, or 1. Negative zero counts as zero.
fn hemisphere(x: f32) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Whether two x coordinates lie on different sides of the midplane.
pub fn crosses_midplane(a: f32, b: f32) -> bool {
    hemisphere(a) != hemisphere(b)
}

/// Capture each connection's endpoints. Indices out of range are skipped.
pub fn line_segments(cloud: &ParticleCloud, connections: &[Connection]) -> Vec<LineSegment> {
    connections
        .iter()
        .filter_map(|c| {
            Some(LineSegment {
                start: cloud.position(c.start)?,
                end: cloud.position(c.end)?,
            })
        })
        .collect()
}

/// Expand segments into a line-list vertex stream with one opacity per
/// segment. Missing opacities fall back to fully transparent.
pub fn line_vertices(segments: &[LineSegment], opacity: &[f32], out: &mut Vec<LineVertex>) {
    out.clear();
    for (i, seg) in segments.iter().enumerate() {
        let alpha = opacity.get(i).copied().unwrap_or(0.0);
        out.push(LineVertex {
            position: seg.start,
            opacity: alpha,
        });
        out.push(LineVertex {
            position: seg.end,
            opacity: alpha,
        });
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::Particle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene(seed: u64) -> (ParticleCloud, Vec<Connection>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let cloud = ParticleCloud::generate(1000, &mut rng);
        let connections = generate_connections(&cloud, 50, 0.4, &mut rng);
        (cloud, connections)
    }

    fn particle_at(x: f32) -> Particle {
        Particle {
            position: [x, 0.0, 0.0],
            color: [1.0, 1.0, 1.0],
            size: 0.1,
            radius: 2.0,
        }
    }

    #[test]
    fn endpoints_are_valid_indices() {
        let (cloud, connections) = scene(1);
        assert_eq!(connections.len(), 50);
        for c in &connections {
            assert!(c.start < cloud.len());
            assert!(c.end < cloud.len());
        }
    }

    #[test]
    fn life_and_speed_within_bounds() {
        let (_, connections) = scene(2);
        for c in &connections {
            assert!((0.5..=1.0).contains(&c.life));
            assert!((0.01..=0.03).contains(&c.speed));
        }
    }

    #[test]
    fn forced_connections_always_cross() {
        for seed in 0..10 {
            let (cloud, connections) = scene(seed);
            for c in connections.iter().filter(|c| c.cross_hemisphere) {
                let a = cloud.particles[c.start].position[0];
                let b = cloud.particles[c.end].position[0];
                assert!(crosses_midplane(a, b), "seed {seed}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn at_least_forty_percent_cross_overall() {
        let mut crossing = 0;
        let mut total = 0;
        for seed in 0..20 {
            let (cloud, connections) = scene(seed);
            for c in &connections {
                let a = cloud.particles[c.start].position[0];
                let b = cloud.particles[c.end].position[0];
                if crosses_midplane(a, b) {
                    crossing += 1;
                }
                total += 1;
            }
        }
        let fraction = crossing as f64 / total as f64;
        assert!(fraction >= 0.4, "crossing fraction {fraction}");
    }

    #[test]
    fn bias_one_forces_every_connection() {
        let mut rng = StdRng::seed_from_u64(5);
        let cloud = ParticleCloud::generate(200, &mut rng);
        let connections = generate_connections(&cloud, 30, 1.0, &mut rng);
        assert!(connections.iter().all(|c| c.cross_hemisphere));
    }

    #[test]
    fn one_sided_cloud_falls_back_to_uniform_draw() {
        let cloud = ParticleCloud {
            particles: vec![particle_at(1.0), particle_at(2.0), particle_at(3.0)],
        };
        let mut rng = StdRng::seed_from_u64(9);
        let connections = generate_connections(&cloud, 10, 1.0, &mut rng);
        assert_eq!(connections.len(), 10);
        assert!(connections.iter().all(|c| !c.cross_hemisphere));
    }

    #[test]
    fn empty_cloud_has_no_connections() {
        let cloud = ParticleCloud { particles: vec![] };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_connections(&cloud, 50, 0.4, &mut rng).is_empty());
    }

    #[test]
    fn opacity_formula_is_exact() {
        let t = 987.5;
        let (speed, life) = (0.017, 0.73);
        assert_eq!(
            connection_opacity(t, speed, life),
            0.2 + (t * speed).sin() * 0.3 * life
        );
        assert_eq!(connection_opacity(0.0, speed, life), 0.2);
    }

    #[test]
    fn midplane_uses_three_way_sign() {
        assert!(crosses_midplane(-1.0, 1.0));
        assert!(crosses_midplane(0.0, 1.0));
        assert!(!crosses_midplane(0.0, -0.0));
        assert!(!crosses_midplane(2.0, 0.5));
    }

    #[test]
    fn segments_capture_particle_positions() {
        let (cloud, connections) = scene(4);
        let segments = line_segments(&cloud, &connections);
        assert_eq!(segments.len(), connections.len());
        assert_eq!(segments[0].start, cloud.particles[connections[0].start].position);
        assert_eq!(segments[0].end, cloud.particles[connections[0].end].position);
    }

    #[test]
    fn line_vertices_pair_endpoints_with_opacity() {
        let segments = [
            LineSegment {
                start: [0.0; 3],
                end: [1.0; 3],
            },
            LineSegment {
                start: [2.0; 3],
                end: [3.0; 3],
            },
        ];
        let mut out = Vec::new();
        line_vertices(&segments, &[0.25], &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].opacity, 0.25);
        assert_eq!(out[1].opacity, 0.25);
        assert_eq!(out[3].position, [3.0; 3]);
        assert_eq!(out[3].opacity, 0.0);
    }
}
