//! Batch processing command for multiple documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use strgen_core::ingest::SourceKind;
use strgen_core::{
    BatchProcessor, BatchSummary, DocumentPipeline, DocumentSource, ReportSink, TextLogSink,
};

use super::load_config;
use super::output::{format_outcome, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of input files
    #[arg(required = true)]
    input: String,

    /// Directory for per-document output files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Summary log path (default from config: output_log.txt)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Stop at the first document that cannot be processed
    #[arg(long)]
    fail_fast: bool,

    /// Skip OCR and use only embedded PDF text
    #[arg(long)]
    text_only: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && SourceKind::from_path(p).is_some())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pipeline = DocumentPipeline::from_config(&config)?;
    let source = if args.text_only {
        DocumentSource::text_only(&config)
    } else {
        DocumentSource::from_config(&config)?
    };
    let processor = BatchProcessor::new(&pipeline, source).with_fail_fast(args.fail_fast);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let result = processor.process_with(&files, |outcome| {
        pb.set_message(outcome.document.clone());
        pb.inc(1);
    });

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            pb.abandon();
            error!("Batch stopped: {}", e);
            anyhow::bail!("Processing failed: {}", e);
        }
    };
    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        write_outputs(output_dir, &summary, args.format)?;
    }

    let log_path = args.log.clone().unwrap_or_else(|| config.report.log_path.clone());
    TextLogSink::new(&log_path).render(&summary)?;
    println!(
        "{} Summary log written to {}",
        style("✓").green(),
        log_path.display()
    );

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary_csv(&summary_path, &summary)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = summary.failed().collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        summary.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(summary.succeeded().count()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            println!(
                "  - {}: {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Outputs are named after the whole input file name so `deed.pdf` and
/// `deed.txt` do not collide.
fn write_outputs(output_dir: &Path, summary: &BatchSummary, format: OutputFormat) -> anyhow::Result<()> {
    for outcome in summary.succeeded() {
        let output_name = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("document");

        let output_path = output_dir.join(format!("{}.{}", output_name, format.extension()));
        fs::write(&output_path, format_outcome(outcome, format)?)?;
        debug!("Wrote output to {}", output_path.display());
    }
    Ok(())
}

fn write_summary_csv(path: &Path, summary: &BatchSummary) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "document_type",
        "fields_found",
        "property_description",
        "processing_time_ms",
        "error",
    ])?;

    for outcome in &summary.documents {
        let time_ms = outcome.processing_time_ms.to_string();

        if let Some(analysis) = &outcome.analysis {
            let fields_found =
                format!("{}/{}", analysis.fields.found_count(), analysis.fields.len());
            wtr.write_record([
                outcome.document.as_str(),
                "success",
                analysis.document_type.label(),
                fields_found.as_str(),
                analysis.property_description.as_str(),
                time_ms.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                outcome.document.as_str(),
                "error",
                "",
                "",
                "",
                time_ms.as_str(),
                outcome.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strgen_core::DocumentOutcome;

    #[test]
    fn test_summary_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        let analysis = DocumentPipeline::default().analyze("Certificate No: 1\nPurchased By: X");
        let summary = BatchSummary::new(vec![
            DocumentOutcome::succeeded(Path::new("a.pdf"), analysis, 5),
            DocumentOutcome::failed(Path::new("b.pdf"), "PDF has no pages", 1),
        ]);

        write_summary_csv(&path, &summary).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(lines[1], "a.pdf,success,E-Stamp,2/7,Not Found,5,");
        assert_eq!(lines[2], "b.pdf,error,,,,1,PDF has no pages");
    }

    #[test]
    fn test_outputs_keep_input_extension() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = DocumentPipeline::default();

        let summary = BatchSummary::new(vec![
            DocumentOutcome::succeeded(
                Path::new("docs/deed.pdf"),
                pipeline.analyze("Sale Deed\nSeller: A\nPurchaser: B"),
                3,
            ),
            DocumentOutcome::succeeded(
                Path::new("docs/deed.txt"),
                pipeline.analyze("Certificate No: 1\nPurchased By: X"),
                2,
            ),
        ]);

        write_outputs(dir.path(), &summary, OutputFormat::Json).unwrap();

        let pdf_output = fs::read_to_string(dir.path().join("deed.pdf.json")).unwrap();
        let txt_output = fs::read_to_string(dir.path().join("deed.txt.json")).unwrap();
        assert!(pdf_output.contains("deed.pdf"));
        assert!(txt_output.contains("E-Stamp"));
    }
}
