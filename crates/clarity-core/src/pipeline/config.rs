use std::fmt;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_DIMENSION, DEFAULT_VARIANCE_THRESHOLD};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClarityConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Laplacian variance at or below this falls back to Tenengrad.
    #[serde(default = "default_variance_threshold")]
    pub variance_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            variance_threshold: DEFAULT_VARIANCE_THRESHOLD,
        }
    }
}

fn default_variance_threshold() -> f64 {
    DEFAULT_VARIANCE_THRESHOLD
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Downscale images whose longest side exceeds `max_dimension`.
    #[serde(default = "default_downscale")]
    pub downscale: bool,
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
    #[serde(default)]
    pub filter: ResizeFilter,
}

impl ExtractionConfig {
    /// Longest side allowed before extraction, or `None` to keep the decoded
    /// resolution.
    pub fn dimension_limit(&self) -> Option<u32> {
        self.downscale.then_some(self.max_dimension)
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            downscale: default_downscale(),
            max_dimension: default_max_dimension(),
            filter: ResizeFilter::default(),
        }
    }
}

fn default_downscale() -> bool {
    true
}

fn default_max_dimension() -> u32 {
    DEFAULT_MAX_DIMENSION
}

/// Resampling filter used when downscaling before extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl ResizeFilter {
    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Bilinear"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
