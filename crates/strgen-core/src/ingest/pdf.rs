use std::path::Path;

use tracing::{debug, warn};

use super::SharedOcr;
use crate::batch::TextSource;
use crate::error::{OcrError, Result};
use crate::models::config::PdfConfig;
use crate::models::document::RecognizedText;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// Recognizes PDF documents page by page.
///
/// Pages with enough embedded text use it directly. Other pages are
/// recognized from their embedded scans when an OCR backend is set.
#[derive(Clone)]
pub struct PdfTextSource {
    config: PdfConfig,
    ocr: Option<SharedOcr>,
}

impl PdfTextSource {
    pub fn new(config: PdfConfig) -> Self {
        Self { config, ocr: None }
    }

    pub fn with_ocr(mut self, ocr: Option<SharedOcr>) -> Self {
        self.ocr = ocr;
        self
    }

    /// Recognize a PDF already in memory.
    pub fn recognize_bytes(&self, data: &[u8]) -> Result<RecognizedText> {
        let extractor = PdfExtractor::from_bytes(data)?;

        let page_count = match self.config.max_pages {
            0 => extractor.page_count(),
            max => extractor
                .page_count()
                .min(u32::try_from(max).unwrap_or(u32::MAX)),
        };

        let mut pages = Vec::with_capacity(page_count as usize);
        let mut unrecognized = 0;

        for page in 1..=page_count {
            let embedded = self.embedded_text(&extractor, page);
            if embedded.trim().len() >= self.config.min_text_length {
                pages.push(embedded);
                continue;
            }

            match self.ocr_page(&extractor, page) {
                Some(text) => pages.push(text),
                None => {
                    if embedded.trim().is_empty() {
                        unrecognized += 1;
                    }
                    pages.push(embedded);
                }
            }
        }

        let mut text = RecognizedText::from_pages(&pages);

        if text.is_empty() && self.config.prefer_embedded_text {
            debug!("No per-page text, trying whole-document extraction");
            match extractor.extract_text() {
                Ok(whole) => text = RecognizedText::new(whole),
                Err(e) => warn!("Whole-document text extraction failed: {}", e),
            }
        }

        if text.is_empty() && unrecognized > 0 && self.ocr.is_none() {
            return Err(OcrError::Unavailable.into());
        }

        debug!(
            "Recognized {} characters from {} pages",
            text.len(),
            page_count
        );
        Ok(text)
    }

    fn embedded_text(&self, extractor: &PdfExtractor, page: u32) -> String {
        if !self.config.prefer_embedded_text {
            return String::new();
        }

        extractor.extract_page_text(page).unwrap_or_else(|e| {
            warn!("Failed to extract text from page {}: {}", page, e);
            String::new()
        })
    }

    /// OCR every scan on the page; `None` when nothing was recognized.
    fn ocr_page(&self, extractor: &PdfExtractor, page: u32) -> Option<String> {
        let ocr = self.ocr.as_ref()?;

        let images = extractor.extract_images(page).unwrap_or_else(|e| {
            warn!("Failed to extract images from page {}: {}", page, e);
            Vec::new()
        });

        let mut lines = Vec::new();
        for (i, image) in images.iter().enumerate() {
            match ocr.recognize(image) {
                Ok(text) if !text.trim().is_empty() => lines.push(text),
                Ok(_) => debug!("No text detected in image {} of page {}", i + 1, page),
                Err(e) => warn!("OCR failed for image {} of page {}: {}", i + 1, page, e),
            }
        }

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

impl TextSource for PdfTextSource {
    fn get_text(&self, path: &Path) -> Result<RecognizedText> {
        let data = std::fs::read(path)?;
        self.recognize_bytes(&data)
    }
}
