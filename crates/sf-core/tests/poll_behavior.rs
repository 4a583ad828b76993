//! Integration tests: viewport polling loop (sf-core).
//!
//! Drives `poll_viewport` with scripted probes and an instant sleep,
//! verifying the resolve-once contract, the timeout bound, and the
//! independence of concurrent polls.

use std::cell::Cell;
use std::time::Duration;

use pretty_assertions::assert_eq;
use sf_core::{PollConfig, StageError, ViewportProbe, ViewportSize, poll_viewport};

/// Reports zero until `ready_after` samples have been taken, then a fixed
/// size forever.
struct WarmupProbe {
    ready_after: u32,
    size: (u32, u32),
    taken: Cell<u32>,
}

impl WarmupProbe {
    fn new(ready_after: u32, size: (u32, u32)) -> Self {
        Self {
            ready_after,
            size,
            taken: Cell::new(0),
        }
    }
}

impl ViewportProbe for WarmupProbe {
    fn measure(&self) -> (u32, u32) {
        let taken = self.taken.get();
        self.taken.set(taken + 1);
        if taken < self.ready_after {
            (0, 0)
        } else {
            self.size
        }
    }
}

fn instant(_: Duration) -> std::future::Ready<()> {
    std::future::ready(())
}

// ─── Resolve-once semantics ─────────────────────────────────────────────

#[tokio::test]
async fn resolves_after_layout_warmup() {
    let probe = WarmupProbe::new(5, (1280, 720));

    let size = poll_viewport(&probe, PollConfig::default(), instant)
        .await
        .unwrap();

    assert_eq!(
        size,
        ViewportSize {
            width: 1280,
            height: 720
        }
    );
    assert_eq!(probe.taken.get(), 6, "five rejected samples, then the hit");
}

#[tokio::test]
async fn a_single_zero_dimension_keeps_polling() {
    struct HalfReady {
        taken: Cell<u32>,
    }
    impl ViewportProbe for HalfReady {
        fn measure(&self) -> (u32, u32) {
            let taken = self.taken.get();
            self.taken.set(taken + 1);
            match taken {
                0 => (1024, 0),
                1 => (0, 768),
                _ => (1024, 768),
            }
        }
    }

    let probe = HalfReady {
        taken: Cell::new(0),
    };
    let size = poll_viewport(&probe, PollConfig::default(), instant)
        .await
        .unwrap();
    assert_eq!(
        size,
        ViewportSize {
            width: 1024,
            height: 768
        }
    );
}

// ─── Timeout bound ──────────────────────────────────────────────────────

#[tokio::test]
async fn unbounded_config_survives_long_warmups() {
    // No timeout configured: a warmup far beyond any plausible bound still
    // resolves instead of erroring.
    let probe = WarmupProbe::new(10_000, (640, 480));

    let size = poll_viewport(&probe, PollConfig::default(), instant)
        .await
        .unwrap();
    assert_eq!(
        size,
        ViewportSize {
            width: 640,
            height: 480
        }
    );
}

#[tokio::test]
async fn timeout_reports_total_wait() {
    let probe = WarmupProbe::new(u32::MAX, (0, 0));
    let config = PollConfig {
        interval: Duration::from_millis(50),
        timeout: Some(Duration::from_millis(400)),
    };

    let err = poll_viewport(&probe, config, instant).await.unwrap_err();

    // 400 / 50 = 8 attempts of 50 ms each.
    assert_eq!(err, StageError::Timeout { waited_ms: 400 });
}

#[tokio::test]
async fn probe_becoming_ready_just_before_the_bound_still_wins() {
    let probe = WarmupProbe::new(7, (800, 600));
    let config = PollConfig {
        interval: Duration::from_millis(100),
        timeout: Some(Duration::from_millis(800)),
    };

    let size = poll_viewport(&probe, config, instant).await.unwrap();
    assert_eq!(
        size,
        ViewportSize {
            width: 800,
            height: 600
        }
    );
}

// ─── Independent concurrent polls ───────────────────────────────────────

#[tokio::test]
async fn concurrent_polls_do_not_share_state() {
    let slow = WarmupProbe::new(20, (1920, 1080));
    let fast = WarmupProbe::new(0, (320, 200));

    let (a, b) = tokio::join!(
        poll_viewport(&slow, PollConfig::default(), instant),
        poll_viewport(&fast, PollConfig::default(), instant),
    );

    assert_eq!(
        a.unwrap(),
        ViewportSize {
            width: 1920,
            height: 1080
        }
    );
    assert_eq!(
        b.unwrap(),
        ViewportSize {
            width: 320,
            height: 200
        }
    );
}
