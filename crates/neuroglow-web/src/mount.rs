//! Mounting, the animation-frame loop, and teardown.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use neuroglow_common::{MountError, NeuroglowError};
use neuroglow_config::NeuroglowConfig;
use neuroglow_renderer::BrainBackground;

use crate::dom;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type FrameHandle = Rc<Cell<Option<i32>>>;

/// A background attached to the page.
///
/// Dropping the handle (from Rust, or `unmount()` / `free()` from JS)
/// cancels the pending frame, detaches the listeners, releases GPU
/// resources, and removes the canvas.
#[wasm_bindgen(js_name = BrainBackground)]
pub struct WebBackground {
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    background: Rc<RefCell<BrainBackground>>,
    frame_callback: FrameCallback,
    frame_handle: FrameHandle,
    on_resize: Option<Closure<dyn FnMut()>>,
    on_visibility: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen(js_class = BrainBackground)]
impl WebBackground {
    /// Tear the background down.
    pub fn unmount(self) {
        drop(self);
    }
}

impl WebBackground {
    fn new(
        window: Window,
        document: Document,
        canvas: HtmlCanvasElement,
        background: BrainBackground,
    ) -> Self {
        Self {
            window,
            document,
            canvas,
            background: Rc::new(RefCell::new(background)),
            frame_callback: Rc::new(RefCell::new(None)),
            frame_handle: Rc::new(Cell::new(None)),
            on_resize: None,
            on_visibility: None,
        }
    }

    /// Register the resize and visibility listeners, then start the loop.
    fn listen(&mut self) -> Result<(), MountError> {
        // Resize: camera aspect, canvas buffer, surface, depth.
        let on_resize = {
            let window = self.window.clone();
            let canvas = self.canvas.clone();
            let background = self.background.clone();
            Closure::wrap(Box::new(move || {
                let viewport = dom::viewport(&window);
                let size = background.borrow_mut().resize(viewport);
                dom::size_canvas(&canvas, viewport, (size.width, size.height));
            }) as Box<dyn FnMut()>)
        };
        self.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .map_err(|e| MountError::HostUnavailable(format!("resize listener: {e:?}")))?;
        self.on_resize = Some(on_resize);

        // Visibility: pause while the page is hidden.
        let on_visibility = {
            let document = self.document.clone();
            let background = self.background.clone();
            Closure::wrap(Box::new(move || {
                background.borrow_mut().set_visible(!document.hidden());
            }) as Box<dyn FnMut()>)
        };
        self.document
            .add_event_listener_with_callback(
                "visibilitychange",
                on_visibility.as_ref().unchecked_ref(),
            )
            .map_err(|e| MountError::HostUnavailable(format!("visibility listener: {e:?}")))?;
        self.on_visibility = Some(on_visibility);

        self.background
            .borrow_mut()
            .set_visible(!self.document.hidden());

        start_loop(
            &self.window,
            &self.background,
            &self.frame_callback,
            &self.frame_handle,
        )
    }
}

impl Drop for WebBackground {
    fn drop(&mut self) {
        if let Some(id) = self.frame_handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Drops the loop closure and the self-reference it holds.
        drop(self.frame_callback.borrow_mut().take());

        if let Some(cb) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = self.on_visibility.take() {
            let _ = self.document.remove_event_listener_with_callback(
                "visibilitychange",
                cb.as_ref().unchecked_ref(),
            );
        }

        self.background.borrow_mut().dispose();
        self.canvas.remove();

        tracing::info!("Brain background unmounted");
    }
}

/// Build the scene, attach a canvas to the configured mount element, and
/// start the loop.
pub(crate) async fn mount(config: &NeuroglowConfig) -> Result<WebBackground, NeuroglowError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let element_id = &config.renderer.mount_element;
    let container = dom::mount_element(&document, element_id)?;

    let viewport = dom::viewport(&window);
    let mut background = BrainBackground::new(config, viewport);

    let canvas = dom::create_canvas(&document)?;
    let size = background.surface_size();
    dom::size_canvas(&canvas, viewport, (size.width, size.height));
    container
        .append_child(&canvas)
        .map_err(|e| MountError::HostUnavailable(format!("append canvas: {e:?}")))?;

    if let Err(e) = background
        .attach_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .await
    {
        canvas.remove();
        return Err(e.into());
    }

    // Any failure past this point drops the handle, which undoes the mount.
    let mut handle = WebBackground::new(window, document, canvas, background);
    handle.listen()?;

    tracing::info!(
        "Brain background mounted into #{element_id} ({}x{} buffer)",
        size.width,
        size.height
    );

    Ok(handle)
}

/// Install the self-rescheduling frame callback and request the first frame.
fn start_loop(
    window: &Window,
    background: &Rc<RefCell<BrainBackground>>,
    frame_callback: &FrameCallback,
    frame_handle: &FrameHandle,
) -> Result<(), MountError> {
    let callback = {
        let window = window.clone();
        let background = background.clone();
        let slot = frame_callback.clone();
        let handle = frame_handle.clone();
        Closure::wrap(Box::new(move |now_ms: f64| {
            // Reschedule first so a failing frame never stops the loop.
            if let Some(cb) = slot.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => handle.set(Some(id)),
                    Err(e) => tracing::error!("requestAnimationFrame failed: {e:?}"),
                }
            }
            background.borrow_mut().frame(now_ms);
        }) as Box<dyn FnMut(f64)>)
    };

    let id = window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| MountError::HostUnavailable(format!("requestAnimationFrame: {e:?}")))?;
    frame_handle.set(Some(id));
    *frame_callback.borrow_mut() = Some(callback);
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
