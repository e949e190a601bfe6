use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::consts::{LUMA_SHIFT, LUMA_WEIGHT_B, LUMA_WEIGHT_G, LUMA_WEIGHT_R};
use crate::error::{ClarityError, Result};
use crate::luminance::LuminanceGrid;
use crate::pipeline::config::{ExtractionConfig, ResizeFilter};

/// Fixed-point BT.601 luma of one RGB pixel.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let value = (LUMA_WEIGHT_R * r as u32 + LUMA_WEIGHT_G * g as u32 + LUMA_WEIGHT_B * b as u32)
        >> LUMA_SHIFT;
    value.min(255) as u8
}

/// Target size when fitting `(width, height)` into a `max_dimension` square.
///
/// Returns the input unchanged when it already fits. Each side is rounded and
/// kept at least 1 pixel.
pub fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let largest = width.max(height);
    if largest <= max_dimension {
        return (width, height);
    }
    let scale = max_dimension as f64 / largest as f64;
    let target_w = ((width as f64 * scale).round() as u32).max(1);
    let target_h = ((height as f64 * scale).round() as u32).max(1);
    (target_w, target_h)
}

/// Convert a decoded image into a byte luminance grid, downscaling first when
/// `max_dimension` is set and exceeded. Alpha is ignored.
///
/// A limit of 0 is rejected rather than collapsing every image to 1x1.
pub fn extract_luminance(
    image: &DynamicImage,
    max_dimension: Option<u32>,
    filter: ResizeFilter,
) -> Result<LuminanceGrid<u8>> {
    let (w, h) = (image.width(), image.height());
    let (target_w, target_h) = match max_dimension {
        Some(0) => return Err(ClarityError::InvalidMaxDimension(0)),
        Some(limit) => scaled_dimensions(w, h, limit),
        None => (w, h),
    };

    let rgb = if (target_w, target_h) != (w, h) {
        debug!(
            from = ?(w, h),
            to = ?(target_w, target_h),
            filter = %filter,
            "Downscaling before luminance extraction"
        );
        image
            .resize_exact(target_w, target_h, filter.filter_type())
            .to_rgb8()
    } else {
        image.to_rgb8()
    };

    LuminanceGrid::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        luma(r, g, b)
    })
}

/// Load an image file and extract its luminance grid.
pub fn load_luminance(path: &Path, config: &ExtractionConfig) -> Result<LuminanceGrid<u8>> {
    let img = image::open(path)?;
    extract_luminance(&img, config.dimension_limit(), config.filter)
}
