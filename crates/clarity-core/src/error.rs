use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClarityError {
    #[error("Luminance size mismatch: {width}x{height} grid needs {expected} samples, got {len}")]
    LuminanceSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        len: usize,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid max dimension: {0} (must be at least 1)")]
    InvalidMaxDimension(u32),

    #[error("Empty image sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, ClarityError>;
