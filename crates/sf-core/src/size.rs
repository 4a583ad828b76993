//! Size value types shared across the workspace.

use crate::error::StageError;
use serde::{Deserialize, Serialize};

/// A sampled snapshot of the browser display area.
///
/// Produced by the viewport poller, which only yields once both dimensions
/// read non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

/// The fixed design resolution requested by the caller.
///
/// Immutable for the lifetime of the page; every refit scales from the same
/// logical size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalSize {
    pub width: u32,
    pub height: u32,
}

impl LogicalSize {
    /// Fail unless both dimensions are positive.
    ///
    /// A zero dimension would make the fit ratios meaningless, so callers
    /// reject it up front instead of dividing by zero later.
    pub fn ensure_positive(self) -> Result<Self, StageError> {
        if self.width == 0 || self.height == 0 {
            return Err(StageError::InvalidLogicalSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// The display size derived for an element: the largest box that fits the
/// viewport while preserving the logical aspect ratio (up to floor
/// rounding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitResult {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_size_serializes_with_plain_field_names() {
        // The JS side consumes this shape directly as {width, height}.
        let size = ViewportSize {
            width: 1280,
            height: 600,
        };
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, r#"{"width":1280,"height":600}"#);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = LogicalSize {
            width: 0,
            height: 200,
        }
        .ensure_positive()
        .unwrap_err();
        assert_eq!(
            err,
            StageError::InvalidLogicalSize {
                width: 0,
                height: 200
            }
        );
    }
}
