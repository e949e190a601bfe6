/// Laplacian variance at or below this value is treated as unreliable and the
/// scorer falls back to Tenengrad.
pub const DEFAULT_VARIANCE_THRESHOLD: f64 = 1e-6;

/// Default bound on the longest image side before luminance extraction.
pub const DEFAULT_MAX_DIMENSION: u32 = 1024;

/// Fixed-point BT.601 luminance weight for the red channel (0.299 * 256).
pub const LUMA_WEIGHT_R: u32 = 77;

/// Fixed-point BT.601 luminance weight for the green channel (0.587 * 256).
pub const LUMA_WEIGHT_G: u32 = 150;

/// Fixed-point BT.601 luminance weight for the blue channel (0.114 * 256).
pub const LUMA_WEIGHT_B: u32 = 29;

/// Right shift that undoes the fixed-point luminance scale.
pub const LUMA_SHIFT: u32 = 8;

/// Percentage reported for each image when neither score carries any signal.
pub const TIE_PERCENT: i32 = 50;
