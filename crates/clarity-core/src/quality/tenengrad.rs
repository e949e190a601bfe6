use ndarray::ArrayView2;

use crate::error::Result;
use crate::luminance::{grid_view, Sample};

/// Compute the Tenengrad focus measure using the Sobel operator.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
///
/// Score = mean of sqrt(Gx^2 + Gy^2) over the interior. Higher = sharper.
/// Stays informative on low-contrast buffers where Laplacian variance
/// collapses toward zero.
pub fn tenengrad<T: Sample>(width: u32, height: u32, luminance: &[T]) -> Result<f64> {
    Ok(tenengrad_view(grid_view(width, height, luminance)?))
}

pub fn tenengrad_view<T: Sample>(data: ArrayView2<'_, T>) -> f64 {
    let (h, w) = data.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }

    let px = |row: usize, col: usize| -> i64 { data[[row, col]].as_() };

    let mut sum = 0.0f64;
    let count = ((h - 2) * (w - 2)) as f64;

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let top_left = px(row - 1, col - 1);
            let top = px(row - 1, col);
            let top_right = px(row - 1, col + 1);
            let left = px(row, col - 1);
            let right = px(row, col + 1);
            let bottom_left = px(row + 1, col - 1);
            let bottom = px(row + 1, col);
            let bottom_right = px(row + 1, col + 1);

            let gx = (-top_left - 2 * left - bottom_left + top_right + 2 * right + bottom_right)
                as f64;
            let gy = (-top_left - 2 * top - top_right + bottom_left + 2 * bottom + bottom_right)
                as f64;

            sum += (gx * gx + gy * gy).sqrt();
        }
    }

    sum / count
}

