//! Frame scheduling: sleep until the next frame is due, then redraw.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::NeuroglowApp;

impl NeuroglowApp {
    /// Request a redraw when a frame is due, otherwise wake up when it
    /// will be. While hidden, block until the next window event.
    pub(super) fn schedule(&mut self, event_loop: &ActiveEventLoop) {
        let Some(wait) = self.next_wake() else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };

        if wait.is_zero() {
            if let Some(ref window) = self.window {
                window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + wait));
        }
    }

    /// Time until the next frame, or `None` when nothing should run.
    pub(super) fn next_wake(&self) -> Option<Duration> {
        if !self.is_visible() || self.window.is_none() {
            return None;
        }
        let bg = self.background.as_ref()?;
        let remaining_ms = bg.animator().next_frame_in_ms(self.now_ms());
        Some(Duration::from_secs_f64(remaining_ms / 1000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroglow_config::NeuroglowConfig;

    #[test]
    fn nothing_scheduled_without_window() {
        let app = NeuroglowApp::new(NeuroglowConfig::default());
        assert!(app.next_wake().is_none());
    }

    #[test]
    fn nothing_scheduled_while_hidden() {
        let mut app = NeuroglowApp::new(NeuroglowConfig::default());
        app.occluded = true;
        assert!(app.next_wake().is_none());
    }
}
