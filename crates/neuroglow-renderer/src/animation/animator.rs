//! The frame-by-frame state machine driving the background.

use std::f64::consts::TAU;

use neuroglow_config::schema::AnimationConfig;

use super::clock::FrameClock;
use super::types::{AnimationState, FrameOutcome, LoopState, GLOW_BASE_INTENSITY};
use crate::synapses::{connection_opacity, Connection};

/// Amplitude of the glow light's oscillation around its base intensity.
const GLOW_SWING: f64 = 0.5;

/// Pulse parameters of one connector, copied out of its [`Connection`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pulse {
    speed: f64,
    life: f64,
}

/// Advances [`AnimationState`] once per due frame.
///
/// Owns the throttle clock and the pause flag; hosts feed it timestamps
/// and visibility changes and render whenever `tick` says so.
#[derive(Debug, Clone)]
pub struct BrainAnimator {
    clock: FrameClock,
    loop_state: LoopState,
    mesh_step_y: f64,
    mesh_step_z: f64,
    cloud_step_y: f64,
    pulses: Vec<Pulse>,
    state: AnimationState,
}

impl BrainAnimator {
    pub fn new(config: &AnimationConfig, connections: &[Connection]) -> Self {
        let pulses = connections
            .iter()
            .map(|c| Pulse {
                speed: c.speed,
                life: c.life,
            })
            .collect::<Vec<_>>();

        Self {
            clock: FrameClock::new(config.throttle_ms()),
            loop_state: LoopState::Active,
            mesh_step_y: config.mesh_rotation_y,
            mesh_step_z: config.mesh_rotation_z,
            cloud_step_y: config.cloud_rotation_y,
            state: AnimationState::new(pulses.len()),
            pulses,
        }
    }

    /// Process the host callback for timestamp `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameOutcome {
        if self.loop_state == LoopState::Paused {
            return FrameOutcome::Paused;
        }
        if !self.clock.try_advance(now_ms) {
            return FrameOutcome::Throttled;
        }

        let s = &mut self.state;
        s.mesh_rotation_y = wrap_angle(s.mesh_rotation_y + self.mesh_step_y);
        s.mesh_rotation_z = wrap_angle(s.mesh_rotation_z + self.mesh_step_z);
        s.cloud_rotation_y = wrap_angle(s.cloud_rotation_y + self.cloud_step_y);
        s.time_seconds = now_ms * 0.001;

        for (opacity, pulse) in s.connection_opacity.iter_mut().zip(&self.pulses) {
            *opacity = connection_opacity(now_ms, pulse.speed, pulse.life).clamp(0.0, 1.0) as f32;
        }

        s.glow_intensity = glow_intensity(now_ms);

        FrameOutcome::Advanced
    }

    /// Pause while hidden, resume when shown. State is kept either way.
    pub fn set_visible(&mut self, visible: bool) {
        let next = if visible {
            LoopState::Active
        } else {
            LoopState::Paused
        };
        if next != self.loop_state {
            tracing::debug!(?next, "Animation loop state changed");
            self.loop_state = next;
        }
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn throttle_ms(&self) -> f64 {
        self.clock.throttle_ms()
    }

    /// Milliseconds until the next frame would be processed.
    pub fn next_frame_in_ms(&self, now_ms: f64) -> f64 {
        self.clock.remaining_ms(now_ms)
    }
}

/// Glow light intensity at `now_ms`: `1.5 + sin(t·0.001)·0.5`.
pub fn glow_intensity(now_ms: f64) -> f32 {
    (GLOW_BASE_INTENSITY as f64 + (now_ms * 0.001).sin() * GLOW_SWING) as f32
}

fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(speed: f64, life: f64) -> Connection {
        Connection {
            start: 0,
            end: 1,
            life,
            speed,
            cross_hemisphere: false,
        }
    }

    fn animator() -> BrainAnimator {
        let connections = vec![connection(0.01, 0.5), connection(0.025, 0.9)];
        BrainAnimator::new(&AnimationConfig::default(), &connections)
    }

    #[test]
    fn hundred_frames_forty_ms_apart() {
        let mut anim = animator();
        for i in 0..100 {
            let outcome = anim.tick(40.0 * (i + 1) as f64);
            assert_eq!(outcome, FrameOutcome::Advanced);
        }
        let s = anim.state();
        assert!((s.mesh_rotation_y - 0.2).abs() < 1e-9);
        assert!((s.mesh_rotation_z - 0.1).abs() < 1e-9);
        assert!((s.cloud_rotation_y - 0.1).abs() < 1e-9);
        assert!((s.time_seconds - 4.0).abs() < 1e-12);
    }

    #[test]
    fn first_tick_at_zero_is_throttled() {
        let mut anim = animator();
        let before = anim.state().clone();
        assert_eq!(anim.tick(0.0), FrameOutcome::Throttled);
        assert_eq!(anim.state(), &before);
    }

    #[test]
    fn ticks_inside_throttle_window_change_nothing() {
        let mut anim = animator();
        assert_eq!(anim.tick(100.0), FrameOutcome::Advanced);
        let snapshot = anim.state().clone();
        for t in [101.0, 110.0, 120.0, 133.0] {
            assert_eq!(anim.tick(t), FrameOutcome::Throttled);
        }
        assert_eq!(anim.state(), &snapshot);
        assert_eq!(anim.tick(134.0), FrameOutcome::Advanced);
    }

    #[test]
    fn hidden_mid_sequence_freezes_until_shown() {
        let mut anim = animator();
        let mut t = 0.0;
        for _ in 0..10 {
            t += 40.0;
            anim.tick(t);
        }
        anim.set_visible(false);
        assert_eq!(anim.loop_state(), LoopState::Paused);
        let frozen = anim.state().clone();
        for _ in 0..50 {
            t += 40.0;
            assert_eq!(anim.tick(t), FrameOutcome::Paused);
        }
        assert_eq!(anim.state(), &frozen);

        anim.set_visible(true);
        t += 40.0;
        assert_eq!(anim.tick(t), FrameOutcome::Advanced);
        assert!((anim.state().mesh_rotation_y - 11.0 * 0.002).abs() < 1e-9);
    }

    #[test]
    fn rotation_wraps_into_full_turn() {
        let config = AnimationConfig {
            mesh_rotation_y: 1.0,
            ..AnimationConfig::default()
        };
        let mut anim = BrainAnimator::new(&config, &[]);
        for i in 0..10 {
            anim.tick(40.0 * (i + 1) as f64);
        }
        let y = anim.state().mesh_rotation_y;
        assert!((0.0..TAU).contains(&y));
        assert!((y - (10.0_f64).rem_euclid(TAU)).abs() < 1e-9);
    }

    #[test]
    fn opacity_follows_pulse_formula() {
        let mut anim = animator();
        let t = 1234.0;
        anim.tick(t);
        let s = anim.state();
        let expected0 = 0.2 + (t * 0.01).sin() * 0.3 * 0.5;
        let expected1 = 0.2 + (t * 0.025).sin() * 0.3 * 0.9;
        assert!((s.connection_opacity[0] as f64 - expected0.clamp(0.0, 1.0)).abs() < 1e-6);
        assert!((s.connection_opacity[1] as f64 - expected1.clamp(0.0, 1.0)).abs() < 1e-6);
    }

    #[test]
    fn stored_opacity_never_goes_negative() {
        let mut anim = BrainAnimator::new(&AnimationConfig::default(), &[connection(0.03, 1.0)]);
        let mut t = 0.0;
        for _ in 0..500 {
            t += 40.0;
            anim.tick(t);
            let o = anim.state().connection_opacity[0];
            assert!((0.0..=1.0).contains(&o));
        }
    }

    #[test]
    fn glow_oscillates_around_base() {
        assert!((glow_intensity(0.0) - 1.5).abs() < 1e-6);
        let peak = glow_intensity(std::f64::consts::FRAC_PI_2 * 1000.0);
        assert!((peak - 2.0).abs() < 1e-6);
        let mut anim = animator();
        anim.tick(500.0);
        assert!((anim.state().glow_intensity - glow_intensity(500.0)).abs() < 1e-6);
    }

    #[test]
    fn set_visible_is_idempotent() {
        let mut anim = animator();
        anim.set_visible(true);
        assert_eq!(anim.loop_state(), LoopState::Active);
        anim.set_visible(false);
        anim.set_visible(false);
        assert_eq!(anim.loop_state(), LoopState::Paused);
    }
}
