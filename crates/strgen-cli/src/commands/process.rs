//! Process command - classify a single document and extract its fields.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use strgen_core::ingest::SourceKind;
use strgen_core::{DocumentOutcome, DocumentPipeline, DocumentSource, TextSource};

use super::load_config;
use super::output::{format_outcome, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, image or recognized text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// OCR model directory
    #[arg(long)]
    ocr_model_dir: Option<PathBuf>,

    /// Skip OCR and use only embedded PDF text
    #[arg(long)]
    text_only: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(dir) = &args.ocr_model_dir {
        config.ocr.model_dir = dir.clone();
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    if SourceKind::from_path(&args.input).is_none() {
        anyhow::bail!("Unsupported file format: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Loading rules...");
    let pipeline = DocumentPipeline::from_config(&config)?;
    let source = if args.text_only {
        DocumentSource::text_only(&config)
    } else {
        DocumentSource::from_config(&config)?
    };

    pb.set_message("Recognizing text...");
    let text = source.get_text(&args.input);

    let text = match text {
        Ok(text) => text,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };
    debug!("Recognized {} characters", text.len());

    pb.set_message("Classifying...");
    let analysis = pipeline.analyze(text.as_str());
    pb.finish_and_clear();

    let outcome = DocumentOutcome::succeeded(
        &args.input,
        analysis,
        start.elapsed().as_millis() as u64,
    );
    let output = format_outcome(&outcome, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
