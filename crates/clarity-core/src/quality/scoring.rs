use std::fmt;

use ndarray::ArrayView2;
use serde::Serialize;
use tracing::debug;

use crate::consts::DEFAULT_VARIANCE_THRESHOLD;
use crate::error::Result;
use crate::luminance::{grid_view, LuminanceGrid, Sample};

use super::score_with_method;

/// Focus measure that produced a [`SharpnessScore`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SharpnessMethod {
    #[default]
    Laplacian,
    Tenengrad,
}

impl fmt::Display for SharpnessMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laplacian => write!(f, "Laplacian"),
            Self::Tenengrad => write!(f, "Tenengrad"),
        }
    }
}

/// Sharpness assessment for a single image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SharpnessScore {
    /// Sanitized score of the selected method. Finite and >= 0.
    pub value: f64,
    pub method: SharpnessMethod,
    /// Variance of Laplacian, reported even when Tenengrad was selected.
    pub laplacian_value: f64,
    /// Present only when the Tenengrad fallback ran.
    pub tenengrad_value: Option<f64>,
}

/// Score a row-major luminance buffer.
///
/// Variance of Laplacian is used when it exceeds `variance_threshold`;
/// otherwise the Tenengrad gradient energy is computed and reported instead.
/// Fails only when `luminance.len() != width * height` or a dimension is zero.
pub fn compute_sharpness<T: Sample>(
    width: u32,
    height: u32,
    luminance: &[T],
    variance_threshold: f64,
) -> Result<SharpnessScore> {
    let view = grid_view(width, height, luminance)?;
    Ok(score_view(view, variance_threshold))
}

/// [`compute_sharpness`] with the default variance threshold.
pub fn compute_sharpness_default<T: Sample>(
    width: u32,
    height: u32,
    luminance: &[T],
) -> Result<SharpnessScore> {
    compute_sharpness(width, height, luminance, DEFAULT_VARIANCE_THRESHOLD)
}

/// Score an already validated grid.
pub fn score_grid<T: Sample>(grid: &LuminanceGrid<T>, variance_threshold: f64) -> SharpnessScore {
    score_view(grid.view(), variance_threshold)
}

pub fn score_view<T: Sample>(data: ArrayView2<'_, T>, variance_threshold: f64) -> SharpnessScore {
    let laplacian_value = score_with_method(data, SharpnessMethod::Laplacian);
    if laplacian_value > variance_threshold {
        debug!(laplacian = laplacian_value, "Laplacian variance above threshold");
        return SharpnessScore {
            value: laplacian_value,
            method: SharpnessMethod::Laplacian,
            laplacian_value,
            tenengrad_value: None,
        };
    }

    let tenengrad_value = score_with_method(data, SharpnessMethod::Tenengrad);
    debug!(
        laplacian = laplacian_value,
        tenengrad = tenengrad_value,
        threshold = variance_threshold,
        "Falling back to Tenengrad"
    );
    SharpnessScore {
        value: tenengrad_value,
        method: SharpnessMethod::Tenengrad,
        laplacian_value,
        tenengrad_value: Some(tenengrad_value),
    }
}
