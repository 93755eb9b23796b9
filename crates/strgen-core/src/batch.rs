//! Multi-document processing with per-document failure isolation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::document::{DocumentAnalysis, RecognizedText};
use crate::pipeline::DocumentPipeline;

/// Produces recognized text for a document on disk.
pub trait TextSource {
    /// Recognize the text of the document at `path`.
    fn get_text(&self, path: &Path) -> Result<RecognizedText>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn get_text(&self, path: &Path) -> Result<RecognizedText> {
        (**self).get_text(path)
    }
}

/// Result of processing one document of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    /// Document identifier (file name).
    pub document: String,

    /// Full path of the source document.
    pub path: PathBuf,

    /// Analysis, when text was recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DocumentAnalysis>,

    /// Ingestion failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Ingestion and analysis time in milliseconds.
    pub processing_time_ms: u64,
}

impl DocumentOutcome {
    pub fn succeeded(path: &Path, analysis: DocumentAnalysis, processing_time_ms: u64) -> Self {
        Self {
            document: document_id(path),
            path: path.to_path_buf(),
            analysis: Some(analysis),
            error: None,
            processing_time_ms,
        }
    }

    pub fn failed(path: &Path, error: impl ToString, processing_time_ms: u64) -> Self {
        Self {
            document: document_id(path),
            path: path.to_path_buf(),
            analysis: None,
            error: Some(error.to_string()),
            processing_time_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.analysis.is_some()
    }
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// When processing finished.
    pub generated_at: DateTime<Utc>,

    /// One outcome per input document.
    pub documents: Vec<DocumentOutcome>,
}

impl BatchSummary {
    pub fn new(documents: Vec<DocumentOutcome>) -> Self {
        Self {
            generated_at: Utc::now(),
            documents,
        }
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.documents.iter().filter(|d| d.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.documents.iter().filter(|d| !d.is_success())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Runs ingestion and analysis over many documents.
///
/// A document whose text cannot be recognized is recorded as failed and the
/// batch continues, unless fail-fast is enabled.
pub struct BatchProcessor<'a, S: TextSource> {
    pipeline: &'a DocumentPipeline,
    source: S,
    fail_fast: bool,
}

impl<'a, S: TextSource> BatchProcessor<'a, S> {
    pub fn new(pipeline: &'a DocumentPipeline, source: S) -> Self {
        Self {
            pipeline,
            source,
            fail_fast: false,
        }
    }

    /// Stop at the first ingestion failure instead of recording it.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Recognize and analyze one document.
    pub fn process_one(&self, path: &Path) -> Result<DocumentOutcome> {
        let start = Instant::now();

        match self.source.get_text(path) {
            Ok(text) => {
                if text.is_empty() {
                    warn!("No text recognized in {}", path.display());
                }
                let analysis = self.pipeline.analyze(text.as_str());
                Ok(DocumentOutcome::succeeded(path, analysis, elapsed_ms(start)))
            }
            Err(e) if !self.fail_fast => {
                warn!("Failed to process {}: {}", path.display(), e);
                Ok(DocumentOutcome::failed(path, e, elapsed_ms(start)))
            }
            Err(e) => Err(e),
        }
    }

    /// Process every document, calling `on_done` after each one.
    pub fn process_with<P, F>(&self, paths: &[P], mut on_done: F) -> Result<BatchSummary>
    where
        P: AsRef<Path>,
        F: FnMut(&DocumentOutcome),
    {
        let mut documents = Vec::with_capacity(paths.len());

        for path in paths {
            let outcome = self.process_one(path.as_ref())?;
            on_done(&outcome);
            documents.push(outcome);
        }

        let summary = BatchSummary::new(documents);
        info!(
            "Processed {} documents: {} succeeded, {} failed",
            summary.len(),
            summary.succeeded().count(),
            summary.failed().count()
        );
        Ok(summary)
    }

    pub fn process<P: AsRef<Path>>(&self, paths: &[P]) -> Result<BatchSummary> {
        self.process_with(paths, |_| {})
    }
}

fn document_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
