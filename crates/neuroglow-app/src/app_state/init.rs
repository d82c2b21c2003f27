//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use neuroglow_common::{MountError, NeuroglowError, Result, Viewport};

use super::core::NeuroglowApp;

impl NeuroglowApp {
    /// Create the window and attach the background's GPU surface.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<()> {
        let win = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(win.title.clone())
            .with_transparent(win.transparent)
            .with_inner_size(winit::dpi::LogicalSize::new(
                win.width as f64,
                win.height as f64,
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| MountError::WindowCreation(e.to_string()))?;

        let background = self
            .background
            .as_mut()
            .ok_or_else(|| NeuroglowError::Other("background already shut down".into()))?;

        // The native surface is sized in physical pixels already.
        let size = window.inner_size();
        background.resize(Viewport::new(size.width as f64, size.height as f64, 1.0));

        pollster::block_on(background.attach_surface(window.clone()))?;

        tracing::info!(
            "Window ready ({}x{} physical, scale {:.2})",
            size.width,
            size.height,
            window.scale_factor(),
        );

        self.window = Some(window);
        Ok(())
    }
}
