//! Aspect-preserving fit computation.
//!
//! Pure arithmetic: given a logical design resolution and a measured
//! viewport, find the largest scaled size with the same aspect ratio that
//! still fits. Both dimensions round down, so the fitted box never exceeds
//! the true maximal fit and never needs overflow clipping.

use crate::error::StageError;
use crate::size::{FitResult, LogicalSize, ViewportSize};

/// Compute the largest [`FitResult`] for `logical` inside `viewport`.
///
/// Scales by the smaller of the width and height ratios, then floors both
/// dimensions. Fails with [`StageError::InvalidLogicalSize`] when either
/// logical dimension is zero.
pub fn compute_fit(
    logical: LogicalSize,
    viewport: ViewportSize,
) -> Result<FitResult, StageError> {
    let logical = logical.ensure_positive()?;

    let width_ratio = f64::from(viewport.width) / f64::from(logical.width);
    let height_ratio = f64::from(viewport.height) / f64::from(logical.height);
    let scale = width_ratio.min(height_ratio);

    Ok(FitResult {
        width: (f64::from(logical.width) * scale).floor() as u32,
        height: (f64::from(logical.height) * scale).floor() as u32,
    })
}
