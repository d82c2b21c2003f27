//! Browser host for the Neuroglow background.
//!
//! On load, mounts a canvas into `#brain-bg` (or the element named by the
//! renderer config), drives the animation from `requestAnimationFrame`,
//! and follows window resizes and page visibility. A missing mount
//! element is logged and the page carries on without the background.
#![cfg(target_arch = "wasm32")]

mod dom;
mod mount;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use neuroglow_config::NeuroglowConfig;

pub use mount::WebBackground;

thread_local! {
    /// The background mounted automatically at startup.
    static AUTO_MOUNTED: RefCell<Option<WebBackground>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    tracing::info!("Neuroglow web v{} starting", env!("CARGO_PKG_VERSION"));

    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || spawn_local(auto_mount()));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        spawn_local(auto_mount());
    }
    Ok(())
}

async fn auto_mount() {
    let config = NeuroglowConfig::default();
    match mount::mount(&config).await {
        Ok(background) => {
            AUTO_MOUNTED.with(|slot| {
                if let Some(previous) = slot.borrow_mut().replace(background) {
                    previous.unmount();
                }
            });
        }
        Err(e) => tracing::error!("Brain background not mounted: {e}"),
    }
}

/// Mount a background into the element with `element_id` (default
/// `brain-bg`). The caller owns the returned handle.
#[wasm_bindgen(js_name = mountBrainBackground)]
pub async fn mount_brain_background(element_id: Option<String>) -> Result<WebBackground, JsValue> {
    let mut config = NeuroglowConfig::default();
    if let Some(id) = element_id {
        config.renderer.mount_element = id;
    }
    mount::mount(&config)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tear down the background mounted at startup, if any.
#[wasm_bindgen(js_name = unmountBrainBackground)]
pub fn unmount_brain_background() {
    if let Some(background) = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take()) {
        background.unmount();
    }
}
