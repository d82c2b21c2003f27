//! Graceful shutdown: release GPU resources and drop the window.

use super::core::NeuroglowApp;

impl NeuroglowApp {
    /// Dispose the background, then drop it and the window. Safe to call
    /// more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut bg) = self.background.take() {
            bg.dispose();
        }
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
