use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use clarity_core::compare::{Comparison, PhotoSlot};
use clarity_core::pipeline::compare_images;
use serde::Serialize;

use super::ScoringArgs;
use crate::summary::print_comparison;

#[derive(Args)]
pub struct CompareArgs {
    /// First image (slot A)
    pub image_a: PathBuf,

    /// Second image (slot B)
    pub image_b: PathBuf,

    /// Print the comparison as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Serialize)]
struct CompareReport<'a> {
    #[serde(flatten)]
    comparison: &'a Comparison,
    leading: Option<PhotoSlot>,
    message: String,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let config = args.scoring.resolve()?;
    let comparison = compare_images(&args.image_a, &args.image_b, &config).with_context(|| {
        format!(
            "Failed to compare {} and {}",
            args.image_a.display(),
            args.image_b.display()
        )
    })?;

    if args.json {
        let report = CompareReport {
            comparison: &comparison,
            leading: comparison.leading_slot(),
            message: comparison.to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_comparison(&args.image_a, &args.image_b, &comparison);
    }
    Ok(())
}
