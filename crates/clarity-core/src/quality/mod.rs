pub mod laplacian;
pub mod scoring;
pub mod tenengrad;

use ndarray::ArrayView2;

use crate::luminance::Sample;

pub use scoring::{
    compute_sharpness, compute_sharpness_default, score_grid, SharpnessMethod, SharpnessScore,
};

/// Clamp a computed score to a finite, non-negative value.
///
/// NaN, infinities and negative values (e.g. variance rounding below zero on
/// a flat image) all become 0.0. Idempotent.
pub fn sanitize_score(value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        return 0.0;
    }
    value
}

/// Score a luminance view with the given method, sanitized.
pub fn score_with_method<T: Sample>(data: ArrayView2<'_, T>, method: SharpnessMethod) -> f64 {
    let raw = match method {
        SharpnessMethod::Laplacian => laplacian::laplacian_variance_view(data),
        SharpnessMethod::Tenengrad => tenengrad::tenengrad_view(data),
    };
    sanitize_score(raw)
}
