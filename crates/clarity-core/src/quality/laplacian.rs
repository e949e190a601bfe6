use ndarray::ArrayView2;

use crate::error::Result;
use crate::luminance::{grid_view, Sample};

/// Compute Laplacian variance of a luminance buffer — higher means sharper.
///
/// Applies the 4-neighbour Laplacian stencil to every interior pixel:
///    0 -1  0
///   -1  4 -1
///    0 -1  0
/// Then returns the variance of the response. Grids narrower or shorter than
/// 3 pixels have no interior and score 0.0.
///
/// The raw result is not sanitized; see [`super::sanitize_score`].
pub fn laplacian_variance<T: Sample>(width: u32, height: u32, luminance: &[T]) -> Result<f64> {
    Ok(laplacian_variance_view(grid_view(width, height, luminance)?))
}

pub fn laplacian_variance_view<T: Sample>(data: ArrayView2<'_, T>) -> f64 {
    let (h, w) = data.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }

    let px = |row: usize, col: usize| -> i64 { data[[row, col]].as_() };

    let mut sum = 0.0f64;
    let mut sum_sq = 0.0f64;
    let count = ((h - 2) * (w - 2)) as f64;

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let lap = 4 * px(row, col)
                - px(row, col - 1)
                - px(row, col + 1)
                - px(row - 1, col)
                - px(row + 1, col);
            let lap = lap as f64;
            sum += lap;
            sum_sq += lap * lap;
        }
    }

    let mean = sum / count;
    sum_sq / count - mean * mean
}
