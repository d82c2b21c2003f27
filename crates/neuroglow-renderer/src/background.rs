//! The animated brain background: scene, animator, and (once a surface
//! exists) the GPU render state, driven by host callbacks.

use neuroglow_common::Viewport;
use neuroglow_config::NeuroglowConfig;
use rand::Rng;

use crate::animation::{BrainAnimator, FrameOutcome};
use crate::gpu::{GpuOptions, PhysicalSize, RendererError};
use crate::render_state::RenderState;
use crate::scene::{parse_clear_color, scene_rng, BrainScene};

/// Host-facing handle. Hosts call `resize`, `set_visible`, and `frame`;
/// everything else is internal.
pub struct BrainBackground {
    scene: BrainScene,
    animator: BrainAnimator,
    render: Option<RenderState>,
    viewport: Viewport,
    max_pixel_ratio: f64,
    gpu_options: GpuOptions,
    disposed: bool,
}

impl BrainBackground {
    /// Build the scene for `viewport`, seeded from `config.scene.seed`.
    pub fn new(config: &NeuroglowConfig, viewport: Viewport) -> Self {
        let mut rng = scene_rng(config.scene.seed);
        Self::with_rng(config, viewport, &mut rng)
    }

    pub fn with_rng<R: Rng + ?Sized>(
        config: &NeuroglowConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let clear_color = parse_clear_color(&config.renderer.clear_color);
        let scene = BrainScene::build(&config.scene, clear_color, viewport.aspect(), rng);
        let animator = BrainAnimator::new(&config.animation, &scene.connections);

        Self {
            scene,
            animator,
            render: None,
            viewport,
            max_pixel_ratio: config.renderer.max_pixel_ratio,
            gpu_options: GpuOptions {
                high_performance: config.renderer.high_performance,
            },
            disposed: false,
        }
    }

    /// Drawing-buffer size for the current viewport, pixel ratio capped.
    pub fn surface_size(&self) -> PhysicalSize {
        let (w, h) = self.viewport.drawing_buffer_size(self.max_pixel_ratio);
        PhysicalSize::new(w, h)
    }

    /// Create GPU resources for `target`. Replaces any existing render state.
    pub async fn attach_surface(
        &mut self,
        target: impl Into<wgpu::SurfaceTarget<'static>>,
    ) -> Result<(), RendererError> {
        if self.disposed {
            return Err(RendererError::Disposed);
        }
        let render = RenderState::new(
            target,
            self.surface_size(),
            self.gpu_options,
            &self.scene,
            self.animator.state(),
        )
        .await?;
        self.render = Some(render);
        Ok(())
    }

    /// Update the camera aspect and resize the surface and depth buffer.
    pub fn resize(&mut self, viewport: Viewport) -> PhysicalSize {
        self.viewport = viewport;
        self.scene.set_viewport(viewport.width, viewport.height);
        let size = self.surface_size();
        if let Some(render) = self.render.as_mut() {
            render.resize(size.width, size.height);
        }
        tracing::debug!(
            width = size.width,
            height = size.height,
            aspect = self.scene.camera.aspect,
            "Background resized"
        );
        size
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.animator.set_visible(visible);
    }

    /// Host frame callback. Advances the animation and renders when a
    /// frame is due. Render failures are logged, never propagated.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if self.disposed {
            return FrameOutcome::Paused;
        }
        let outcome = self.animator.tick(now_ms);
        if outcome.should_render() {
            if let Some(render) = self.render.as_mut() {
                if let Err(e) = render.render(&self.scene, self.animator.state()) {
                    tracing::error!("Frame render failed: {e}");
                }
            }
        }
        outcome
    }

    /// Release GPU resources. Further frames do nothing. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if self.render.take().is_some() {
            tracing::info!("Background GPU resources released");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn has_surface(&self) -> bool {
        self.render.is_some()
    }

    pub fn scene(&self) -> &BrainScene {
        &self.scene
    }

    pub fn animator(&self) -> &BrainAnimator {
        &self.animator
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::LoopState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn background(viewport: Viewport) -> BrainBackground {
        let mut rng = StdRng::seed_from_u64(1);
        BrainBackground::with_rng(&NeuroglowConfig::default(), viewport, &mut rng)
    }

    #[test]
    fn resize_sets_aspect_and_surface_size() {
        let mut bg = background(Viewport::new(1024.0, 768.0, 1.0));
        let size = bg.resize(Viewport::new(800.0, 600.0, 1.0));
        assert!((bg.scene().camera.aspect - 800.0 / 600.0).abs() < 1e-9);
        assert_eq!(size, PhysicalSize::new(800, 600));
    }

    #[test]
    fn surface_size_caps_pixel_ratio() {
        let bg = background(Viewport::new(1000.0, 500.0, 3.0));
        assert_eq!(bg.surface_size(), PhysicalSize::new(1500, 750));
    }

    #[test]
    fn frames_advance_without_surface() {
        let mut bg = background(Viewport::new(800.0, 600.0, 1.0));
        assert!(!bg.has_surface());
        assert_eq!(bg.frame(0.0), FrameOutcome::Throttled);
        assert_eq!(bg.frame(40.0), FrameOutcome::Advanced);
        assert!((bg.animator().state().mesh_rotation_y - 0.002).abs() < 1e-12);
    }

    #[test]
    fn hidden_background_does_not_advance() {
        let mut bg = background(Viewport::new(800.0, 600.0, 1.0));
        bg.frame(40.0);
        bg.set_visible(false);
        assert_eq!(bg.animator().loop_state(), LoopState::Paused);
        let before = bg.animator().state().clone();
        for i in 0..50 {
            assert_eq!(bg.frame(80.0 + 40.0 * i as f64), FrameOutcome::Paused);
        }
        assert_eq!(bg.animator().state(), &before);
        bg.set_visible(true);
        assert_eq!(bg.frame(5000.0), FrameOutcome::Advanced);
    }

    #[test]
    fn dispose_is_idempotent_and_stops_frames() {
        let mut bg = background(Viewport::new(800.0, 600.0, 1.0));
        bg.dispose();
        bg.dispose();
        assert!(bg.is_disposed());
        assert_eq!(bg.frame(1000.0), FrameOutcome::Paused);
    }
}
