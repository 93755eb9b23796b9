//! Core library for property document classification.
//!
//! This crate provides:
//! - A keyword catalog of legal/property document categories (E-Stamp, Sale Deed, ...)
//! - Whole-word keyword classification of recognized text
//! - Per-category field extraction rules
//! - Batch orchestration with per-document failure isolation and summary rendering
//! - PDF and image ingestion through OCR (`native` feature)

pub mod error;
pub mod models;
pub mod classify;
pub mod extract;
pub mod pipeline;
pub mod batch;
pub mod report;
#[cfg(feature = "native")]
pub mod pdf;
#[cfg(feature = "native")]
pub mod ocr;
#[cfg(feature = "native")]
pub mod ingest;

pub use error::{Result, RuleError, StrError};
pub use models::category::{Catalog, DocumentCategory};
pub use models::document::{
    Classification, DocumentAnalysis, FieldMap, FieldValue, RecognizedText, NOT_FOUND, UNKNOWN,
};
pub use models::config::StrConfig;
pub use classify::{CategoryScore, Classifier};
pub use extract::{FieldExtractor, RuleRegistry};
pub use pipeline::DocumentPipeline;
pub use batch::{BatchProcessor, BatchSummary, DocumentOutcome, TextSource};
pub use report::{render_summary, ReportSink, TextLogSink, WriterSink};

#[cfg(feature = "native")]
pub use ingest::{DocumentSource, ImageTextSource, PdfTextSource, PlainTextSource};
#[cfg(feature = "native")]
pub use ocr::{OcrBackend, OcrResult, PureOcrEngine, TextBox};
