use std::path::Path;

use tracing::debug;

use super::SharedOcr;
use crate::batch::TextSource;
use crate::error::{OcrError, Result};
use crate::models::document::RecognizedText;

/// Recognizes photographed or scanned pages stored as image files.
#[derive(Clone)]
pub struct ImageTextSource {
    ocr: Option<SharedOcr>,
}

impl ImageTextSource {
    pub fn new(ocr: Option<SharedOcr>) -> Self {
        Self { ocr }
    }

    pub fn has_ocr(&self) -> bool {
        self.ocr.is_some()
    }
}

impl TextSource for ImageTextSource {
    fn get_text(&self, path: &Path) -> Result<RecognizedText> {
        let ocr = self.ocr.as_ref().ok_or(OcrError::Unavailable)?;

        let image = image::open(path)?;
        debug!("Loaded {}x{} image {}", image.width(), image.height(), path.display());

        Ok(RecognizedText::new(ocr.recognize(&image)?))
    }
}
