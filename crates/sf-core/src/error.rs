//! Error taxonomy for stage operations.

use thiserror::Error;

/// Failures surfaced by the sizing and polling operations.
///
/// There are no retries anywhere in this workspace; every operation either
/// succeeds, fails one of these preconditions, or (for an unbounded poll)
/// keeps waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StageError {
    /// The requested design resolution had a zero dimension.
    #[error("logical size must be positive in both dimensions, got {width}x{height}")]
    InvalidLogicalSize { width: u32, height: u32 },

    /// A bounded poll exhausted its attempts before the viewport reported
    /// non-zero dimensions.
    #[error("viewport dimensions not available after {waited_ms} ms")]
    Timeout { waited_ms: u64 },
}
