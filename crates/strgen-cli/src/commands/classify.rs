//! Classify command - categorize text that was recognized elsewhere.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;

use strgen_core::DocumentPipeline;

use super::load_config;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Text file to classify ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Show keyword matches for every category
    #[arg(long)]
    scores: bool,
}

pub async fn run(args: ClassifyArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let pipeline = DocumentPipeline::from_config(&config)?;

    let text = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let classification = pipeline.classifier().classify(&text);
    println!("{}", classification);

    if args.scores {
        println!();
        println!(
            "{} Keyword matches (threshold {}):",
            style("ℹ").blue(),
            pipeline.classifier().min_matches()
        );
        for score in pipeline.score(&text) {
            let count = if score.matches >= pipeline.classifier().min_matches() {
                style(score.matches).green()
            } else {
                style(score.matches).dim()
            };
            println!(
                "  {}: {} [{}]",
                score.category,
                count,
                score.matched_keywords.join(", ")
            );
        }
    }

    Ok(())
}
