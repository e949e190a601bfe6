pub mod compare;
pub mod config;
pub mod score;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clarity_core::pipeline::config::ClarityConfig;
use tracing::debug;

/// Scoring options shared by `compare` and `score`.
#[derive(Args)]
pub struct ScoringArgs {
    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Laplacian variance at or below this falls back to Tenengrad
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Longest image side before scoring
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_dimension: Option<u32>,

    /// Score images at their decoded resolution
    #[arg(long)]
    pub no_downscale: bool,
}

impl ScoringArgs {
    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn resolve(&self) -> Result<ClarityConfig> {
        let mut config: ClarityConfig = if let Some(ref path) = self.config {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid clarity config")?
        } else {
            ClarityConfig::default()
        };

        if let Some(threshold) = self.threshold {
            config.scoring.variance_threshold = threshold;
        }
        if let Some(max_dimension) = self.max_dimension {
            config.extraction.max_dimension = max_dimension;
        }
        if self.no_downscale {
            config.extraction.downscale = false;
        }
        debug!(?config, "Resolved config");
        Ok(config)
    }
}
