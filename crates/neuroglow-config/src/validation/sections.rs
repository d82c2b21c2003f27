//! Per-section checks.

use neuroglow_common::Color;

use crate::schema::NeuroglowConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &NeuroglowConfig) {
    let scene = &config.scene;
    validate_range(errors, "scene.particle_count", scene.particle_count, 2, 100_000);
    validate_range(errors, "scene.connection_count", scene.connection_count, 0, 10_000);
    validate_range_f64(
        errors,
        "scene.cross_hemisphere_bias",
        scene.cross_hemisphere_bias,
        0.0,
        1.0,
    );
    validate_range_f64(errors, "scene.mesh_radius", scene.mesh_radius, 0.1, 10.0);
    validate_range(errors, "scene.mesh_detail", scene.mesh_detail, 0, 6);
    validate_range_f64(errors, "scene.displacement", scene.displacement, 0.0, 1.0);
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &NeuroglowConfig) {
    let anim = &config.animation;
    validate_range_f64(errors, "animation.target_fps", anim.target_fps, 1.0, 240.0);
    validate_range_f64(errors, "animation.mesh_rotation_y", anim.mesh_rotation_y, -1.0, 1.0);
    validate_range_f64(errors, "animation.mesh_rotation_z", anim.mesh_rotation_z, -1.0, 1.0);
    validate_range_f64(errors, "animation.cloud_rotation_y", anim.cloud_rotation_y, -1.0, 1.0);
}

pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &NeuroglowConfig) {
    let renderer = &config.renderer;
    validate_range_f64(
        errors,
        "renderer.max_pixel_ratio",
        renderer.max_pixel_ratio,
        0.25,
        4.0,
    );
    if Color::from_hex(&renderer.clear_color).is_none() {
        errors.push(format!(
            "renderer.clear_color = {:?} is not a hex color",
            renderer.clear_color
        ));
    }
    if renderer.mount_element.trim().is_empty() {
        errors.push("renderer.mount_element must not be empty".into());
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &NeuroglowConfig) {
    let window = &config.window;
    validate_range(errors, "window.width", window.width, 64, 16_384);
    validate_range(errors, "window.height", window.height, 64, 16_384);
}
