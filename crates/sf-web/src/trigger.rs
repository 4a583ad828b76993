//! Resize trigger wiring.

use gloo_events::EventListener;
use sf_core::poll::PollConfig;
use sf_core::size::LogicalSize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::fit::fit_element;

/// Refit `element` on every window `resize`, and once eagerly right away.
///
/// The listener is leaked and lives for the page. Refits are
/// fire-and-forget tasks, each running its own viewport poll, so a burst
/// of resize events can leave several polls in flight at once; the last
/// style write wins and event-loop FIFO is the only ordering guarantee.
pub fn install_resize_refit(
    element: &HtmlElement,
    logical: LogicalSize,
    config: PollConfig,
) -> Result<(), JsValue> {
    let window = crate::window()?;

    let target = element.clone();
    let listener = EventListener::new(&window, "resize", move |_event| {
        schedule_refit(target.clone(), logical, config);
    });
    listener.forget();

    // Eager first fit so the canvas is sized before the first real resize.
    schedule_refit(element.clone(), logical, config);
    Ok(())
}

fn schedule_refit(element: HtmlElement, logical: LogicalSize, config: PollConfig) {
    spawn_local(async move {
        if let Err(err) = fit_element(&element, logical, config).await {
            log::warn!("refit failed: {err:?}");
        }
    });
}
