//! DOM layer for SF (Stage Fit): everything that touches `web-sys`.
//!
//! The pure sizing and polling logic lives in `sf-core`; this crate binds
//! it to the live document by measuring the window, styling elements,
//! installing the gesture shield, and wiring the resize trigger. All DOM
//! mutation in the workspace goes through these modules, so a host can
//! reason about side effects from this one crate.

pub mod acquire;
pub mod fit;
pub mod probe;
pub mod shield;
pub mod trigger;

pub use acquire::acquire_viewport;
pub use fit::{apply_fit, fit_element};
pub use probe::BrowserProbe;
pub use shield::{SHIELD_ID, suppress_outside_gestures};
pub use trigger::install_resize_refit;

use wasm_bindgen::JsValue;

// ─── DOM access helpers ─────────────────────────────────────────────────

pub(crate) fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub(crate) fn document() -> Result<web_sys::Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Convert any displayable error into the `JsValue` form DOM-facing
/// functions reject with.
pub fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
