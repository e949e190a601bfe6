use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use clarity_core::pipeline::rank_images_with_progress;
use clarity_core::quality::SharpnessScore;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use super::ScoringArgs;

#[derive(Args)]
pub struct ScoreArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Show top N images only
    #[arg(long, default_value = "20")]
    pub top: usize,

    /// Print the ranking as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Serialize)]
struct RankedImage<'a> {
    rank: usize,
    file: &'a Path,
    #[serde(flatten)]
    score: &'a SharpnessScore,
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let config = args.scoring.resolve()?;
    let total = args.files.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scoring images");

    let ranked = rank_images_with_progress(&args.files, &config, |done| {
        pb.set_position(done as u64);
    })?;
    pb.finish_with_message("Scoring images");

    if args.json {
        let report: Vec<RankedImage> = ranked
            .iter()
            .take(args.top)
            .enumerate()
            .map(|(rank, (idx, score))| RankedImage {
                rank: rank + 1,
                file: &args.files[*idx],
                score,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\nTop {} images by sharpness (of {}):",
        args.top.min(total),
        total
    );
    println!(
        "{:>5}  {:>10}  {:>14}  {:>14}  {}",
        "Rank", "Method", "Score", "Laplacian", "File"
    );
    println!("{}", "-".repeat(60));

    for (rank, (idx, score)) in ranked.iter().take(args.top).enumerate() {
        println!(
            "{:>5}  {:>10}  {:>14.6}  {:>14.6}  {}",
            rank + 1,
            score.method,
            score.value,
            score.laplacian_value,
            args.files[*idx].display()
        );
    }

    if let (Some(best), Some(worst)) = (ranked.first(), ranked.last()) {
        println!("\nBest score:  {:.6}", best.1.value);
        println!("Worst score: {:.6}", worst.1.value);
    }

    Ok(())
}
