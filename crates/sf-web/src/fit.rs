//! Applying a fit to a live element.

use sf_core::fit::compute_fit;
use sf_core::poll::PollConfig;
use sf_core::size::{FitResult, LogicalSize};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::acquire::acquire_viewport;

/// Set `element`'s CSS display size to `fit` and center it absolutely.
///
/// Touches style only. A canvas's drawing-buffer resolution is the
/// engine's business and stays untouched; the browser scales the buffer
/// into the styled box. Zero offsets on all four sides plus `margin: auto`
/// center the element within its positioned ancestor.
pub fn apply_fit(element: &HtmlElement, fit: FitResult) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("width", &px(fit.width))?;
    style.set_property("height", &px(fit.height))?;
    style.set_property("position", "absolute")?;
    style.set_property("left", "0px")?;
    style.set_property("top", "0px")?;
    style.set_property("right", "0px")?;
    style.set_property("bottom", "0px")?;
    style.set_property("margin", "auto")?;
    Ok(())
}

/// Fit `element` to the current viewport at `logical`'s aspect ratio.
///
/// Rejects a zero logical dimension before touching the DOM, then waits
/// for the viewport to become measurable (see [`acquire_viewport`]),
/// computes the largest preserving fit, and applies it. Overlapping calls
/// are safe: the last style write wins.
pub async fn fit_element(
    element: &HtmlElement,
    logical: LogicalSize,
    config: PollConfig,
) -> Result<(), JsValue> {
    let logical = logical.ensure_positive().map_err(crate::js_error)?;
    let viewport = acquire_viewport(config).await?;
    let fit = compute_fit(logical, viewport).map_err(crate::js_error)?;
    log::debug!(
        "fit {}x{} into {}x{} -> {}x{}",
        logical.width,
        logical.height,
        viewport.width,
        viewport.height,
        fit.width,
        fit.height
    );
    apply_fit(element, fit)
}

fn px(value: u32) -> String {
    format!("{value}px")
}
