use ndarray::{Array2, ArrayView2};
use num_traits::AsPrimitive;

use crate::error::{ClarityError, Result};

/// Element type of a luminance buffer.
///
/// Samples are conceptually in [0, 255] whatever their storage width. The
/// scoring kernels widen every sample to `i64` before applying a stencil, so
/// one kernel serves byte and word buffers alike.
pub trait Sample: Copy + Send + Sync + AsPrimitive<i64> {}

impl Sample for u8 {}
impl Sample for u16 {}
impl Sample for i32 {}

/// A single-channel luminance image.
/// Row-major, shape = (height, width), one sample per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct LuminanceGrid<T: Sample = u8> {
    data: Array2<T>,
}

impl<T: Sample> LuminanceGrid<T> {
    /// Wrap a row-major sample buffer.
    ///
    /// Fails if either dimension is zero or if `samples.len()` differs from
    /// `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<T>) -> Result<Self> {
        let len = samples.len();
        check_shape(width, height, len)?;
        let data = Array2::from_shape_vec((height as usize, width as usize), samples)
            .map_err(|_| size_mismatch(width, height, len))?;
        Ok(Self { data })
    }

    /// Build a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ClarityError::InvalidDimensions { width, height });
        }
        let data = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
            f(col as u32, row as u32)
        });
        Ok(Self { data })
    }

    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }
}

/// Borrow a flat row-major buffer as a `(height, width)` view without copying.
pub fn grid_view<T: Sample>(width: u32, height: u32, samples: &[T]) -> Result<ArrayView2<'_, T>> {
    check_shape(width, height, samples.len())?;
    ArrayView2::from_shape((height as usize, width as usize), samples)
        .map_err(|_| size_mismatch(width, height, samples.len()))
}

fn check_shape(width: u32, height: u32, len: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ClarityError::InvalidDimensions { width, height });
    }
    if len != width as usize * height as usize {
        return Err(size_mismatch(width, height, len));
    }
    Ok(())
}

fn size_mismatch(width: u32, height: u32, len: usize) -> ClarityError {
    ClarityError::LuminanceSizeMismatch {
        width,
        height,
        expected: width as usize * height as usize,
        len,
    }
}
