//! Text sources that turn documents on disk into recognized text.

mod image;
mod pdf;
mod text;

pub use self::image::ImageTextSource;
pub use self::pdf::PdfTextSource;
pub use self::text::PlainTextSource;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::batch::TextSource;
use crate::error::{Result, StrError};
use crate::models::config::StrConfig;
use crate::models::document::RecognizedText;
use crate::ocr::{OcrBackend, PureOcrEngine};

/// OCR backend shared by the PDF and image sources.
pub type SharedOcr = Arc<dyn OcrBackend>;

/// Kinds of input file the sources understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Image,
    Text,
}

impl SourceKind {
    /// Detect the kind from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "png" | "jpg" | "jpeg" | "tif" | "tiff" | "bmp" | "webp" => Some(Self::Image),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Dispatches to the PDF, image or plain-text source by file extension.
pub struct DocumentSource {
    pdf: PdfTextSource,
    image: ImageTextSource,
    text: PlainTextSource,
}

impl DocumentSource {
    pub fn new(pdf: PdfTextSource, image: ImageTextSource) -> Self {
        Self {
            pdf,
            image,
            text: PlainTextSource,
        }
    }

    /// Build sources from configuration, loading the OCR engine when enabled
    /// and its models are present.
    pub fn from_config(config: &StrConfig) -> Result<Self> {
        let ocr = load_ocr(config)?;
        Ok(Self::new(
            PdfTextSource::new(config.pdf.clone()).with_ocr(ocr.clone()),
            ImageTextSource::new(ocr),
        ))
    }

    /// Sources that never run OCR.
    pub fn text_only(config: &StrConfig) -> Self {
        Self::new(PdfTextSource::new(config.pdf.clone()), ImageTextSource::new(None))
    }
}

impl TextSource for DocumentSource {
    fn get_text(&self, path: &Path) -> Result<RecognizedText> {
        match SourceKind::from_path(path) {
            Some(SourceKind::Pdf) => self.pdf.get_text(path),
            Some(SourceKind::Image) => self.image.get_text(path),
            Some(SourceKind::Text) => self.text.get_text(path),
            None => Err(StrError::UnsupportedFormat(
                path.extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            )),
        }
    }
}

fn load_ocr(config: &StrConfig) -> Result<Option<SharedOcr>> {
    if !config.ocr.enabled {
        debug!("OCR disabled by configuration");
        return Ok(None);
    }

    if !config.ocr.models_present() {
        warn!(
            "OCR models not found in {}, scanned pages will not be recognized",
            config.ocr.model_dir.display()
        );
        return Ok(None);
    }

    let engine: SharedOcr = Arc::new(PureOcrEngine::from_config(&config.ocr)?);
    Ok(Some(engine))
}
