//! Browser-backed viewport measurements.

use sf_core::poll::ViewportProbe;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Measures the viewport through `window.innerWidth` / `window.innerHeight`.
///
/// Either dimension can read as zero while the browser is still laying out
/// the page; the polling loop in `sf-core` rides that out.
pub struct BrowserProbe {
    window: Window,
}

impl BrowserProbe {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ViewportProbe for BrowserProbe {
    fn measure(&self) -> (u32, u32) {
        (
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }
}

/// `innerWidth`/`innerHeight` arrive as JS numbers; anything absent or
/// non-positive counts as "not measurable yet".
fn dimension(value: Result<JsValue, JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v as u32)
        .unwrap_or(0)
}
