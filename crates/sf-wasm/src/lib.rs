//! WASM bridge for SF (Stage Fit): exposes the canvas bootstrap to
//! JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded alongside the
//! game engine bundle. The engine (renderer choice, scenes, game loop)
//! stays on the JS side; only its drawable surface handle crosses into
//! Rust.

use sf_core::poll::PollConfig;
use sf_core::size::LogicalSize;
use sf_web::fit::fit_element;
use sf_web::js_error;
use sf_web::{acquire_viewport, install_resize_refit, shield};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

/// One-time module setup: console logger plus panic hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_panic_hook_setup();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Sample the viewport until both dimensions are non-zero.
///
/// Resolves with a `{width, height}` object. Polls every 100 ms with no
/// timeout, so the promise stays pending for as long as the browser keeps
/// reporting a zero-sized viewport.
#[wasm_bindgen(js_name = getViewportSizeAsync)]
pub async fn get_viewport_size_async() -> Result<JsValue, JsValue> {
    let size = acquire_viewport(PollConfig::default()).await?;
    let json = serde_json::to_string(&size).map_err(js_error)?;
    js_sys::JSON::parse(&json)
}

/// Resize `element` to the largest box with the
/// `logical_width : logical_height` aspect ratio that fits the viewport,
/// centered absolutely. Display size only; a canvas's drawing buffer is
/// left alone.
///
/// Rejects when either logical dimension is zero.
#[wasm_bindgen(js_name = fitElementAsync)]
pub async fn fit_element_async(
    element: HtmlElement,
    logical_width: u32,
    logical_height: u32,
) -> Result<(), JsValue> {
    let logical = LogicalSize {
        width: logical_width,
        height: logical_height,
    };
    fit_element(&element, logical, PollConfig::default()).await
}

/// Install the outside-canvas gesture shield.
///
/// Calling this more than once inserts more than one shield element with
/// the same id; call it once per page.
#[wasm_bindgen(js_name = suppressOutsideGestures)]
pub fn suppress_outside_gestures() -> Result<(), JsValue> {
    shield::suppress_outside_gestures()
}

/// Canvas bootstrap: holds the fixed design resolution and wires up a
/// canvas created by the host engine.
#[wasm_bindgen]
pub struct Stage {
    logical: LogicalSize,
    config: PollConfig,
}

#[wasm_bindgen]
impl Stage {
    /// Create a stage for the given design resolution.
    ///
    /// Errors when either dimension is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(logical_width: u32, logical_height: u32) -> Result<Stage, JsValue> {
        let logical = LogicalSize {
            width: logical_width,
            height: logical_height,
        }
        .ensure_positive()
        .map_err(js_error)?;

        Ok(Stage {
            logical,
            config: PollConfig::default(),
        })
    }

    /// Wire the engine's canvas: refit on every window resize (plus one
    /// eager refit now) and install the gesture shield.
    pub fn attach(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        log::info!(
            "stage attached at {}x{}",
            self.logical.width,
            self.logical.height
        );
        install_resize_refit(canvas, self.logical, self.config)?;
        shield::suppress_outside_gestures()
    }
}

// ─── Panic hook for WASM debugging ──────────────────────────────────────

fn console_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("SF WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
