//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use neuroglow_common::Viewport;

use super::core::NeuroglowApp;

impl ApplicationHandler for NeuroglowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            tracing::error!("Failed to initialize: {e}");
            self.failed = true;
            self.shutdown();
            event_loop.exit();
            return;
        }

        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                // Zero-sized means minimized on some platforms.
                self.minimized = size.width == 0 || size.height == 0;
                if !self.minimized {
                    if let Some(ref mut bg) = self.background {
                        bg.resize(Viewport::new(size.width as f64, size.height as f64, 1.0));
                    }
                }
                self.sync_visibility();
            }

            WindowEvent::Occluded(occluded) => {
                tracing::debug!(occluded, "Window occlusion changed");
                self.occluded = occluded;
                self.sync_visibility();
            }

            WindowEvent::RedrawRequested => {
                let now = self.now_ms();
                if let Some(ref mut bg) = self.background {
                    bg.frame(now);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.schedule(event_loop);
    }
}
