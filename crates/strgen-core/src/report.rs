//! Plain-text batch summary and the sinks that persist it.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::batch::{BatchSummary, DocumentOutcome};
use crate::error::Result;

/// Heading of every summary.
pub const SUMMARY_HEADER: &str = "Summary of processed PDF files:";

/// Render one block per document, in batch order.
pub fn render_summary(summary: &BatchSummary) -> String {
    let mut output = String::new();
    output.push_str(SUMMARY_HEADER);
    output.push_str("\n\n");

    for outcome in &summary.documents {
        render_document(&mut output, outcome);
    }

    output
}

/// Render a single document block.
pub fn render_document(output: &mut String, outcome: &DocumentOutcome) {
    output.push_str(&format!("PDF: {}\n", outcome.document));

    match (&outcome.analysis, &outcome.error) {
        (Some(analysis), _) => {
            output.push_str(&format!("Document Type: {}\n", analysis.document_type));
            output.push_str("Extracted Keywords:\n");
            for (label, value) in analysis.fields.iter() {
                output.push_str(&format!("{}: {}\n", label, value));
            }
            output.push_str(&format!(
                "Property Description: {}\n",
                analysis.property_description
            ));
        }
        (None, error) => {
            output.push_str("Document Type: Error\n");
            output.push_str(&format!(
                "Error: {}\n",
                error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    output.push('\n');
}

/// Destination for a rendered batch summary.
pub trait ReportSink {
    fn render(&mut self, summary: &BatchSummary) -> Result<()>;
}

/// Writes the summary to a text log file, replacing previous contents.
#[derive(Debug, Clone)]
pub struct TextLogSink {
    path: PathBuf,
}

impl TextLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for TextLogSink {
    fn render(&mut self, summary: &BatchSummary) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, render_summary(summary))?;
        debug!("Wrote summary log to {}", self.path.display());
        Ok(())
    }
}

/// Writes the summary to any writer, such as stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn render(&mut self, summary: &BatchSummary) -> Result<()> {
        self.writer.write_all(render_summary(summary).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
