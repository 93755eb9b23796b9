//! Error types for the strgen-core library.
//!
//! Missing keywords and unmatched field rules are not errors: they surface as
//! the `Unknown` and `Not Found` sentinels. The types here cover ingestion
//! failures and invalid configuration only.

use thiserror::Error;

/// Main error type for the strgen library.
#[derive(Error, Debug)]
pub enum StrError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Category or field rule definition error.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// Image decoding error.
    #[cfg(feature = "native")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document type cannot be ingested.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// OCR was needed but no engine is configured.
    #[error("no OCR engine configured")]
    Unavailable,
}

/// Errors in category and field rule definitions.
///
/// Raised while building a catalog or registry, never while classifying or
/// extracting.
#[derive(Error, Debug)]
pub enum RuleError {
    /// A field pattern failed to compile.
    #[error("invalid pattern for {category}/{label}: {source}")]
    InvalidPattern {
        category: String,
        label: String,
        #[source]
        source: regex::Error,
    },

    /// Two categories share a name.
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    /// A category was defined without keywords.
    #[error("category {0} has no keywords")]
    NoKeywords(String),

    /// A reserved label was used as a category name.
    #[error("reserved category name: {0}")]
    ReservedName(String),
}

/// Result type for the strgen library.
pub type Result<T> = std::result::Result<T, StrError>;
