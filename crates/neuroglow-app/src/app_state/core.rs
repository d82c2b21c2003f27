//! NeuroglowApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use neuroglow_common::Viewport;
use neuroglow_config::NeuroglowConfig;
use neuroglow_renderer::BrainBackground;

/// Top-level application state.
pub struct NeuroglowApp {
    pub(super) config: NeuroglowConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) background: Option<BrainBackground>,

    // Visibility inputs; the loop runs only when neither is set.
    pub(super) occluded: bool,
    pub(super) minimized: bool,

    /// Origin of the millisecond clock handed to the animator.
    pub(super) started: Instant,

    // Initialization failed; the process exits non-zero.
    pub(super) failed: bool,
}

impl NeuroglowApp {
    pub fn new(config: NeuroglowConfig) -> Self {
        let viewport = Viewport::new(
            config.window.width as f64,
            config.window.height as f64,
            1.0,
        );
        let background = BrainBackground::new(&config, viewport);

        Self {
            config,
            window: None,
            background: Some(background),
            occluded: false,
            minimized: false,
            started: Instant::now(),
            failed: false,
        }
    }

    /// Milliseconds since startup, the timestamp fed to each frame.
    pub(super) fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    pub(super) fn is_visible(&self) -> bool {
        !self.occluded && !self.minimized
    }

    /// Push the current visibility to the animator.
    pub(super) fn sync_visibility(&mut self) {
        let visible = self.is_visible();
        if let Some(ref mut bg) = self.background {
            bg.set_visible(visible);
        }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroglow_renderer::LoopState;

    fn app() -> NeuroglowApp {
        let mut config = NeuroglowConfig::default();
        config.scene.seed = Some(3);
        NeuroglowApp::new(config)
    }

    #[test]
    fn new_app_builds_background_without_window() {
        let app = app();
        assert!(app.window.is_none());
        let bg = app.background.as_ref().expect("background");
        assert!(!bg.has_surface());
        assert!((bg.scene().camera.aspect - 1280.0 / 800.0).abs() < 1e-9);
    }

    #[test]
    fn occlusion_or_minimize_pauses() {
        let mut app = app();
        app.occluded = true;
        app.sync_visibility();
        let bg = app.background.as_ref().expect("background");
        assert_eq!(bg.animator().loop_state(), LoopState::Paused);

        app.occluded = false;
        app.minimized = true;
        assert!(!app.is_visible());
        app.minimized = false;
        app.sync_visibility();
        let bg = app.background.as_ref().expect("background");
        assert_eq!(bg.animator().loop_state(), LoopState::Active);
    }

    #[test]
    fn clock_is_monotonic() {
        let app = app();
        let a = app.now_ms();
        let b = app.now_ms();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
