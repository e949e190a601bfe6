pub mod config;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::info;

use crate::compare::Comparison;
use crate::error::{ClarityError, Result};
use crate::io::image_io::load_luminance;
use crate::quality::{score_grid, SharpnessScore};

use self::config::ClarityConfig;

/// Extract and score a single image file.
pub fn score_image(path: &Path, config: &ClarityConfig) -> Result<SharpnessScore> {
    let grid = load_luminance(path, &config.extraction)?;
    let score = score_grid(&grid, config.scoring.variance_threshold);
    info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        method = %score.method,
        score = score.value,
        "Image scored"
    );
    Ok(score)
}

/// Score two images in parallel and split their sharpness into percentages.
pub fn compare_images(path_a: &Path, path_b: &Path, config: &ClarityConfig) -> Result<Comparison> {
    let (score_a, score_b) = rayon::join(
        || score_image(path_a, config),
        || score_image(path_b, config),
    );
    let comparison = Comparison::new(score_a?, score_b?);
    info!(
        percent_a = comparison.percentages.a,
        percent_b = comparison.percentages.b,
        leading = ?comparison.leading_slot(),
        "Comparison complete"
    );
    Ok(comparison)
}

/// Score all images and return (index, SharpnessScore) sorted by score descending.
pub fn rank_images(
    paths: &[PathBuf],
    config: &ClarityConfig,
) -> Result<Vec<(usize, SharpnessScore)>> {
    rank_images_with_progress(paths, config, |_| {})
}

/// Score all images with per-image progress reporting.
///
/// Calls `on_progress(items_done)` as each image is scored.
pub fn rank_images_with_progress(
    paths: &[PathBuf],
    config: &ClarityConfig,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Result<Vec<(usize, SharpnessScore)>> {
    if paths.is_empty() {
        return Err(ClarityError::EmptySequence);
    }

    let done = AtomicUsize::new(0);
    let mut scores: Vec<(usize, SharpnessScore)> = paths
        .par_iter()
        .enumerate()
        .map(|(i, path)| {
            let score = score_image(path, config)?;
            let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
            on_progress(completed);
            Ok((i, score))
        })
        .collect::<Result<_>>()?;

    scores.sort_by(|a, b| b.1.value.total_cmp(&a.1.value));
    info!(total = scores.len(), "Ranking complete");
    Ok(scores)
}
