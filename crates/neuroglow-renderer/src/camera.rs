//! Perspective camera with a mutable aspect ratio.

use crate::math::matrix::{self as mat, Mat4};

/// Fixed-position perspective camera looking down −z.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: [f32; 3],
    projection: Mat4,
}

impl PerspectiveCamera {
    pub const FOV_DEG: f64 = 75.0;
    pub const NEAR: f64 = 0.1;
    pub const FAR: f64 = 1000.0;
    pub const DISTANCE: f32 = 5.0;

    pub fn new(aspect: f64) -> Self {
        let mut camera = Self {
            fov_deg: Self::FOV_DEG,
            aspect,
            near: Self::NEAR,
            far: Self::FAR,
            position: [0.0, 0.0, Self::DISTANCE],
            projection: mat::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Set the aspect ratio from viewport dimensions and recompute the
    /// projection. A zero height leaves the aspect unchanged.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if height > 0.0 && width > 0.0 {
            self.aspect = width / height;
            self.update_projection_matrix();
        }
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = mat::perspective(
            self.fov_deg.to_radians() as f32,
            self.aspect as f32,
            self.near as f32,
            self.far as f32,
        );
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World → view transform. The camera never rotates, so this is the
    /// inverse of its translation.
    pub fn view_matrix(&self) -> Mat4 {
        let [x, y, z] = self.position;
        mat::translate(-x, -y, -z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_camera_uses_fixed_parameters() {
        let cam = PerspectiveCamera::new(1.0);
        assert_eq!(cam.fov_deg, 75.0);
        assert_eq!(cam.near, 0.1);
        assert_eq!(cam.far, 1000.0);
        assert_eq!(cam.position, [0.0, 0.0, 5.0]);
    }

    #[test]
    fn viewport_800_by_600_sets_aspect() {
        let mut cam = PerspectiveCamera::new(1.0);
        cam.set_viewport(800.0, 600.0);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-9);
    }

    #[test]
    fn resize_recomputes_projection() {
        let mut cam = PerspectiveCamera::new(1.0);
        let before = cam.projection_matrix();
        cam.set_viewport(1920.0, 1080.0);
        let after = cam.projection_matrix();
        assert_ne!(before[0], after[0]);
        assert_eq!(before[5], after[5]);
    }

    #[test]
    fn zero_height_is_ignored() {
        let mut cam = PerspectiveCamera::new(2.0);
        cam.set_viewport(800.0, 0.0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = PerspectiveCamera::new(16.0 / 9.0);
        let vp = mat::mul(&cam.projection_matrix(), &cam.view_matrix());
        let clip = mat::transform_point(&vp, [0.0, 0.0, 0.0]);
        assert!(clip[0].abs() < 1e-6 && clip[1].abs() < 1e-6);
        assert!((clip[3] - 5.0).abs() < 1e-5);
    }
}
