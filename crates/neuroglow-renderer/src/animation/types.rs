//! Animation state types.

/// Opacity every connector line starts with before the first processed frame.
pub const INITIAL_LINE_OPACITY: f32 = 0.6;

/// Base intensity of the glow light at the origin.
pub const GLOW_BASE_INTENSITY: f32 = 1.5;

/// Whether the loop processes frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Active,
    Paused,
}

/// What a single `tick` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Hidden; nothing changed.
    Paused,
    /// Too soon after the last processed frame; nothing changed.
    Throttled,
    /// State advanced; the caller should render.
    Advanced,
}

impl FrameOutcome {
    pub fn should_render(self) -> bool {
        matches!(self, FrameOutcome::Advanced)
    }
}

/// Everything the renderer reads from the animation each frame.
///
/// Rotation angles are kept in `[0, 2π)`. Opacities are in `[0, 1]` and
/// indexed in connection creation order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub mesh_rotation_y: f64,
    pub mesh_rotation_z: f64,
    pub cloud_rotation_y: f64,
    /// Shader clock in seconds (`t · 0.001`).
    pub time_seconds: f64,
    pub glow_intensity: f32,
    pub connection_opacity: Vec<f32>,
}

impl AnimationState {
    pub fn new(connection_count: usize) -> Self {
        Self {
            mesh_rotation_y: 0.0,
            mesh_rotation_z: 0.0,
            cloud_rotation_y: 0.0,
            time_seconds: 0.0,
            glow_intensity: GLOW_BASE_INTENSITY,
            connection_opacity: vec![INITIAL_LINE_OPACITY; connection_count],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_rest() {
        let state = AnimationState::new(3);
        assert_eq!(state.mesh_rotation_y, 0.0);
        assert_eq!(state.time_seconds, 0.0);
        assert_eq!(state.glow_intensity, 1.5);
        assert_eq!(state.connection_opacity, vec![0.6; 3]);
    }

    #[test]
    fn only_advanced_frames_render() {
        assert!(FrameOutcome::Advanced.should_render());
        assert!(!FrameOutcome::Throttled.should_render());
        assert!(!FrameOutcome::Paused.should_render());
    }

    #[test]
    fn loop_starts_active() {
        assert_eq!(LoopState::default(), LoopState::Active);
    }
}
