//! Browser-side viewport acquisition.

use gloo_timers::future::TimeoutFuture;
use sf_core::poll::{PollConfig, poll_viewport};
use sf_core::size::ViewportSize;
use wasm_bindgen::JsValue;

use crate::probe::BrowserProbe;

/// Poll the real window until it reports a usable size.
///
/// With the default config this retries every 100 ms and never gives up.
/// Configure a timeout to get a rejection instead of an indefinite wait.
/// Each call runs its own loop; concurrent callers neither share samples
/// nor cancel each other.
pub async fn acquire_viewport(config: PollConfig) -> Result<ViewportSize, JsValue> {
    let probe = BrowserProbe::new(crate::window()?);
    poll_viewport(&probe, config, |interval| {
        TimeoutFuture::new(interval.as_millis() as u32)
    })
    .await
    .map_err(crate::js_error)
}
