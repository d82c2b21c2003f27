//! Brain mesh generation.
//!
//! Builds a subdivided icosahedron as a non-indexed triangle list, pushes
//! every vertex outward or inward by a trigonometric noise term of its own
//! coordinates, then recomputes normals from the deformed faces. Nothing
//! here is random: the same detail level always yields the same surface.

use super::types::BrainVertex;
use crate::math::vector::{self, Vec3};

/// Golden ratio, the icosahedron's characteristic coordinate.
const PHI: f32 = 1.618_034;

const ICOSAHEDRON_VERTICES: [Vec3; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

/// Counter-clockwise (outward-facing) triangles.
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// The deformed icosahedron, ready for upload.
#[derive(Debug, Clone)]
pub struct BrainMesh {
    pub vertices: Vec<BrainVertex>,
    pub detail: u32,
}

impl BrainMesh {
    /// Build the sphere, displace it by `amplitude`, and recompute normals.
    pub fn generate(radius: f32, detail: u32, amplitude: f32) -> Self {
        let mut positions = icosphere_positions(radius, detail);
        displace(&mut positions, amplitude);
        let vertices = with_face_normals(&positions);
        Self { vertices, detail }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Vertex count of a non-indexed icosphere at `detail`: 20 faces, each
/// split into `(detail + 1)^2` triangles.
pub fn expected_vertex_count(detail: u32) -> usize {
    let cols = detail as usize + 1;
    20 * cols * cols * 3
}

/// Positions of a subdivided icosahedron projected onto a sphere of `radius`.
pub fn icosphere_positions(radius: f32, detail: u32) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(expected_vertex_count(detail));
    for [a, b, c] in ICOSAHEDRON_FACES {
        subdivide_face(
            &mut out,
            ICOSAHEDRON_VERTICES[a],
            ICOSAHEDRON_VERTICES[b],
            ICOSAHEDRON_VERTICES[c],
            detail,
        );
    }
    for p in &mut out {
        *p = vector::scale(vector::normalize(*p), radius);
    }
    out
}

/// Split triangle `(a, b, c)` into a `(detail + 1)`-row triangular grid,
/// preserving the winding of the input face.
fn subdivide_face(out: &mut Vec<Vec3>, a: Vec3, b: Vec3, c: Vec3, detail: u32) {
    let cols = detail as usize + 1;

    // grid[i][j]: row i walks from edge ab toward apex c.
    let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
    for i in 0..=cols {
        let t = i as f32 / cols as f32;
        let aj = vector::lerp(a, c, t);
        let bj = vector::lerp(b, c, t);
        let rows = cols - i;
        let row = if rows == 0 {
            vec![aj]
        } else {
            (0..=rows)
                .map(|j| vector::lerp(aj, bj, j as f32 / rows as f32))
                .collect()
        };
        grid.push(row);
    }

    for i in 0..cols {
        for j in 0..(2 * (cols - i) - 1) {
            let k = j / 2;
            if j % 2 == 0 {
                out.push(grid[i][k + 1]);
                out.push(grid[i + 1][k]);
                out.push(grid[i][k]);
            } else {
                out.push(grid[i][k + 1]);
                out.push(grid[i + 1][k + 1]);
                out.push(grid[i + 1][k]);
            }
        }
    }
}

/// Noise factor applied to a vertex: `sin(2x)·cos(2y)·sin(2z)·amplitude`.
pub fn displacement_factor(p: Vec3, amplitude: f32) -> f32 {
    (p[0] * 2.0).sin() * (p[1] * 2.0).cos() * (p[2] * 2.0).sin() * amplitude
}

/// Offset every vertex by itself scaled by its noise factor.
pub fn displace(positions: &mut [Vec3], amplitude: f32) {
    for p in positions.iter_mut() {
        let noise = displacement_factor(*p, amplitude);
        *p = vector::add(*p, vector::scale(*p, noise));
    }
}

/// Attach normals to a non-indexed triangle list. Vertices are not shared
/// between triangles, so each receives its face normal.
fn with_face_normals(positions: &[Vec3]) -> Vec<BrainVertex> {
    let mut vertices = Vec::with_capacity(positions.len());
    for tri in positions.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let normal = vector::normalize(vector::cross(vector::sub(c, b), vector::sub(a, b)));
        for position in [a, b, c] {
            vertices.push(BrainVertex { position, normal });
        }
    }
    vertices
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_three_has_960_vertices() {
        let mesh = BrainMesh::generate(2.0, 3, 0.15);
        assert_eq!(mesh.vertex_count(), 960);
        assert_eq!(expected_vertex_count(3), 960);
    }

    #[test]
    fn vertex_count_matches_formula_for_each_level() {
        for detail in 0..5 {
            assert_eq!(
                icosphere_positions(1.0, detail).len(),
                expected_vertex_count(detail),
                "detail {detail}"
            );
        }
    }

    #[test]
    fn displacement_preserves_vertex_count() {
        let undisplaced = BrainMesh::generate(2.0, 3, 0.0);
        let displaced = BrainMesh::generate(2.0, 3, 0.15);
        assert_eq!(undisplaced.vertex_count(), displaced.vertex_count());
    }

    #[test]
    fn undisplaced_vertices_lie_on_sphere() {
        for p in icosphere_positions(2.0, 3) {
            assert!((vector::length(p) - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn displacement_moves_vertices_by_noise_term() {
        let original = icosphere_positions(2.0, 3);
        let mesh = BrainMesh::generate(2.0, 3, 0.15);
        for (o, v) in original.iter().zip(&mesh.vertices) {
            let noise = displacement_factor(*o, 0.15);
            let expected = vector::scale(*o, 1.0 + noise);
            for axis in 0..3 {
                assert!((expected[axis] - v.position[axis]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn displacement_is_deterministic() {
        let a = BrainMesh::generate(2.0, 3, 0.15);
        let b = BrainMesh::generate(2.0, 3, 0.15);
        assert_eq!(a.vertices, b.vertices);
    }

    #[test]
    fn displacement_is_not_uniform() {
        let mesh = BrainMesh::generate(2.0, 3, 0.15);
        let radii: Vec<f32> = mesh
            .vertices
            .iter()
            .map(|v| vector::length(v.position))
            .collect();
        let min = radii.iter().cloned().fold(f32::MAX, f32::min);
        let max = radii.iter().cloned().fold(f32::MIN, f32::max);
        assert!(max - min > 0.05, "surface should be visibly deformed");
        // |noise| <= amplitude
        assert!(min >= 2.0 * (1.0 - 0.15) - 1e-5);
        assert!(max <= 2.0 * (1.0 + 0.15) + 1e-5);
    }

    #[test]
    fn normals_are_unit_and_face_outward() {
        let mesh = BrainMesh::generate(2.0, 3, 0.15);
        for tri in mesh.vertices.chunks_exact(3) {
            let n = tri[0].normal;
            assert!((vector::length(n) - 1.0).abs() < 1e-4);
            let centroid = vector::scale(
                vector::add(vector::add(tri[0].position, tri[1].position), tri[2].position),
                1.0 / 3.0,
            );
            assert!(vector::dot(n, centroid) > 0.0);
            assert_eq!(tri[0].normal, tri[1].normal);
            assert_eq!(tri[1].normal, tri[2].normal);
        }
    }

    #[test]
    fn base_faces_wind_outward() {
        for [a, b, c] in ICOSAHEDRON_FACES {
            let (a, b, c) = (
                ICOSAHEDRON_VERTICES[a],
                ICOSAHEDRON_VERTICES[b],
                ICOSAHEDRON_VERTICES[c],
            );
            let n = vector::cross(vector::sub(b, a), vector::sub(c, a));
            let centroid = vector::add(vector::add(a, b), c);
            assert!(vector::dot(n, centroid) > 0.0);
        }
    }
}
