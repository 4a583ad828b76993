//! Viewport polling loop.
//!
//! Browsers can report a zero-sized viewport transiently during initial
//! layout. The poller samples a probe on a fixed interval and yields the
//! first sample where both dimensions are non-zero. The timer is injected
//! as a future factory, so the same loop runs under a browser timer in
//! production and an instant no-op sleep in tests.

use std::future::Future;
use std::time::Duration;

use crate::error::StageError;
use crate::size::ViewportSize;

/// Source of raw viewport measurements.
///
/// The browser implementation lives in `sf-web`; tests substitute fakes
/// that script the zero-to-ready transition.
pub trait ViewportProbe {
    /// Current viewport dimensions. Either may still be zero.
    fn measure(&self) -> (u32, u32);
}

/// Polling cadence and bound.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Delay between samples.
    pub interval: Duration,
    /// Give up after roughly this long. `None` polls forever.
    pub timeout: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            timeout: None,
        }
    }
}

impl PollConfig {
    /// Samples allowed before [`StageError::Timeout`], or `None` when
    /// unbounded.
    fn max_attempts(&self) -> Option<u64> {
        self.timeout.map(|timeout| {
            let interval_ms = (self.interval.as_millis() as u64).max(1);
            let timeout_ms = timeout.as_millis() as u64;
            timeout_ms.div_ceil(interval_ms).max(1)
        })
    }
}

/// Poll `probe` until both dimensions are non-zero.
///
/// Yields exactly once, with the first such sample, sleeping
/// `config.interval` between attempts via the `sleep` factory. Each call
/// owns an independent loop; concurrent calls share no state and no
/// cancellation.
pub async fn poll_viewport<P, S, F>(
    probe: &P,
    config: PollConfig,
    mut sleep: S,
) -> Result<ViewportSize, StageError>
where
    P: ViewportProbe + ?Sized,
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    let max_attempts = config.max_attempts();
    let mut attempts: u64 = 0;

    loop {
        let (width, height) = probe.measure();
        if width != 0 && height != 0 {
            log::debug!("viewport ready after {attempts} empty samples: {width}x{height}");
            return Ok(ViewportSize { width, height });
        }

        attempts += 1;
        if let Some(max) = max_attempts {
            if attempts >= max {
                return Err(StageError::Timeout {
                    waited_ms: (config.interval.as_millis() as u64) * attempts,
                });
            }
        }
        sleep(config.interval).await;
    }
}
