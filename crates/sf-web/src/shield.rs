//! The outside-canvas gesture shield.
//!
//! A full-viewport element that swallows the browser's default touch,
//! pointer, and wheel behavior (page scroll, pull-to-refresh, pinch zoom)
//! around the canvas. The shield sits behind the page content
//! (`z-index: -1000`); the interception comes from its listeners, not its
//! paint order, so the canvas's own input handling is unaffected.

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// `id` attribute of the inserted shield element.
pub const SHIELD_ID: &str = "sf-gesture-shield";

/// Events whose default handling the shield cancels.
pub const SUPPRESSED_EVENTS: [&str; 6] = [
    "touchstart",
    "touchmove",
    "touchend",
    "pointerdown",
    "pointerup",
    "wheel",
];

/// Insert the gesture shield into the document body.
///
/// Not idempotent: every call appends a fresh element carrying
/// [`SHIELD_ID`], so hosts are expected to call this once per page.
/// Listener registrations and the element itself are leaked deliberately;
/// the shield lives for the rest of the page.
pub fn suppress_outside_gestures() -> Result<(), JsValue> {
    let document = crate::document()?;
    let shield: HtmlElement = document.create_element("div")?.dyn_into()?;
    shield.set_id(SHIELD_ID);

    let style = shield.style();
    style.set_property("left", "0px")?;
    style.set_property("top", "0px")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("position", "fixed")?;
    style.set_property("z-index", "-1000")?;

    for event in SUPPRESSED_EVENTS {
        // preventDefault requires a non-passive registration.
        let listener = EventListener::new_with_options(
            &shield,
            event,
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            |event| {
                event.prevent_default();
                event.stop_propagation();
            },
        );
        listener.forget();
    }

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&shield)?;
    log::info!("gesture shield installed");
    Ok(())
}
