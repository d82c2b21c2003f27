//! Small DOM helpers with typed errors.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

use neuroglow_common::{MountError, Viewport};

pub(crate) fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or_else(|| MountError::HostUnavailable("no window".into()))
}

pub(crate) fn document() -> Result<Document, MountError> {
    window()?
        .document()
        .ok_or_else(|| MountError::HostUnavailable("no document".into()))
}

/// Window inner size in CSS pixels plus the device pixel ratio.
pub(crate) fn viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

/// The element the canvas is appended to.
pub(crate) fn mount_element(document: &Document, id: &str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::ElementNotFound(id.to_string()))
}

pub(crate) fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, MountError> {
    document
        .create_element("canvas")
        .map_err(|e| MountError::HostUnavailable(format!("create canvas: {e:?}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::HostUnavailable("canvas element has wrong type".into()))
}

/// Size the canvas: CSS box to the viewport, drawing buffer to `buffer`.
pub(crate) fn size_canvas(canvas: &HtmlCanvasElement, viewport: Viewport, buffer: (u32, u32)) {
    canvas.set_width(buffer.0);
    canvas.set_height(buffer.1);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", viewport.width));
    let _ = style.set_property("height", &format!("{}px", viewport.height));
    let _ = style.set_property("display", "block");
}
