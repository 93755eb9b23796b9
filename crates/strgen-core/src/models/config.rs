//! Configuration structures for the classification pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, StrError};

/// Main configuration for strgen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrConfig {
    /// Keyword classification configuration.
    pub classification: ClassificationConfig,

    /// Additional categories appended after the built-in catalog.
    pub categories: Vec<CategoryDefinition>,

    /// PDF ingestion configuration.
    pub pdf: PdfConfig,

    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Summary report configuration.
    pub report: ReportConfig,
}

/// Keyword classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Distinct keywords a category needs before it becomes a candidate.
    pub min_keyword_matches: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            min_keyword_matches: 2,
        }
    }
}

/// A user-defined category with its keywords and field rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Category name, reported as the document type.
    pub name: String,

    /// Keywords whose whole-word presence signals the category.
    pub keywords: Vec<String>,

    /// Field rules, in output order.
    #[serde(default)]
    pub fields: Vec<FieldRuleDefinition>,
}

/// A labeled field pattern. The first capture group is the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRuleDefinition {
    /// Label emitted in the field map.
    pub label: String,

    /// Regular expression, matched case-insensitively.
    pub pattern: String,
}

/// PDF ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Use embedded page text when a page has enough of it.
    pub prefer_embedded_text: bool,

    /// Minimum embedded text length before a page is sent to OCR.
    pub min_text_length: usize,

    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            prefer_embedded_text: true,
            min_text_length: 50,
            max_pages: 0,
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Run OCR on scanned pages and images.
    pub enabled: bool,

    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Keep `[UNK]` tokens emitted for unrecognized glyphs.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.model_dir.join(model_name)
    }

    /// Whether the detection model, recognition model and dictionary exist
    /// on disk.
    pub fn models_present(&self) -> bool {
        [&self.detection_model, &self.recognition_model, &self.dictionary]
            .iter()
            .all(|name| self.model_path(name).exists())
    }
}

/// Summary report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where the batch summary log is written.
    pub log_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("output_log.txt"),
        }
    }
}

impl StrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| StrError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| StrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
