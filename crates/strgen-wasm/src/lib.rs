//! WASM bindings for property document classification.
//!
//! Works on text that was already recognized (browser-side OCR or a PDF text
//! layer); PDF and OCR ingestion stay in the native crates.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use strgen_core::models::document::Classification;
use strgen_core::{Classifier, DocumentPipeline, StrConfig};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Serialize with plain objects so field order survives in JS.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classify recognized text; returns the category name or "Unknown".
#[wasm_bindgen]
pub fn classify_document(text: &str) -> String {
    Classifier::default().classify(text).label().to_string()
}

/// Extract the fields of `category` from `text`.
///
/// Returns an object of label to value ("Not Found" for unmatched rules);
/// empty for "Unknown" or a category without rules.
#[wasm_bindgen]
pub fn extract_fields(text: &str, category: &str) -> Result<JsValue, JsValue> {
    let pipeline = DocumentPipeline::default();
    let fields = pipeline
        .extractor()
        .extract(text, &Classification::from(category));
    to_js(&fields)
}

/// Classify and extract in one call.
#[wasm_bindgen]
pub fn analyze_document(text: &str) -> Result<JsValue, JsValue> {
    to_js(&DocumentPipeline::default().analyze(text))
}

/// Names of the built-in categories, in tie-break order.
#[wasm_bindgen]
pub fn category_names() -> js_sys::Array {
    Classifier::default()
        .catalog()
        .names()
        .map(JsValue::from_str)
        .collect()
}

/// Document analyzer class for browser use.
#[wasm_bindgen]
pub struct DocumentAnalyzer {
    pipeline: DocumentPipeline,
}

#[wasm_bindgen]
impl DocumentAnalyzer {
    /// Create an analyzer with the built-in categories.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            pipeline: DocumentPipeline::default(),
        }
    }

    /// Create an analyzer from a JSON configuration (same format as the CLI).
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<DocumentAnalyzer, JsValue> {
        let config: StrConfig =
            serde_json::from_str(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let pipeline =
            DocumentPipeline::from_config(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { pipeline })
    }

    #[wasm_bindgen(getter)]
    pub fn min_keyword_matches(&self) -> usize {
        self.pipeline.classifier().min_matches()
    }

    /// Set how many distinct keywords a category needs (at least 1).
    #[wasm_bindgen(setter)]
    pub fn set_min_keyword_matches(&mut self, min_matches: usize) {
        let classifier = self.pipeline.classifier().clone().with_min_matches(min_matches);
        self.pipeline = DocumentPipeline::new(classifier, self.pipeline.extractor().clone());
    }

    /// Classify recognized text.
    #[wasm_bindgen]
    pub fn classify(&self, text: &str) -> String {
        self.pipeline.classifier().classify(text).label().to_string()
    }

    /// Keyword matches per category.
    #[wasm_bindgen]
    pub fn scores(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.pipeline.score(text))
    }

    /// Classify and extract fields.
    #[wasm_bindgen]
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.pipeline.analyze(text))
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
