//! Classify-then-extract pipeline for one document's text.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::classify::{CategoryScore, Classifier};
use crate::error::Result;
use crate::extract::{ExtractionRuleSet, FieldExtractor, RuleRegistry};
use crate::models::category::{Catalog, DocumentCategory};
use crate::models::config::StrConfig;
use crate::models::document::DocumentAnalysis;

/// Classifier and field extractor over one catalog.
///
/// Holds only read-only tables, so a single pipeline can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentPipeline {
    classifier: Classifier,
    extractor: FieldExtractor,
}

impl DocumentPipeline {
    pub fn new(classifier: Classifier, extractor: FieldExtractor) -> Self {
        Self {
            classifier,
            extractor,
        }
    }

    /// Build the built-in catalog plus any configured categories.
    ///
    /// Invalid configured categories or patterns are reported here, never
    /// during analysis.
    pub fn from_config(config: &StrConfig) -> Result<Self> {
        let mut catalog = Catalog::builtin();
        let mut registry = RuleRegistry::builtin();

        for definition in &config.categories {
            let category = DocumentCategory::new(&definition.name, definition.keywords.iter().cloned())?;
            catalog.push(category)?;

            if !definition.fields.is_empty() {
                let rules = ExtractionRuleSet::compile(
                    &definition.name,
                    definition
                        .fields
                        .iter()
                        .map(|f| (f.label.clone(), f.pattern.as_str())),
                )?;
                registry.register(&definition.name, Arc::new(rules));
            }

            debug!(
                "Added category {} with {} keywords and {} fields",
                definition.name,
                definition.keywords.len(),
                definition.fields.len()
            );
        }

        let classifier = Classifier::new(catalog)
            .with_min_matches(config.classification.min_keyword_matches);

        Ok(Self::new(classifier, FieldExtractor::new(registry)))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &FieldExtractor {
        &self.extractor
    }

    /// Keyword evidence per category, for diagnostics.
    pub fn score(&self, text: &str) -> Vec<CategoryScore> {
        self.classifier.score(text)
    }

    /// Classify `text` and extract the fields of its category.
    pub fn analyze(&self, text: &str) -> DocumentAnalysis {
        let start = Instant::now();

        let document_type = self.classifier.classify(text);
        let fields = self.extractor.extract(text, &document_type);

        info!(
            "Analyzed {} characters as {} ({} fields) in {:?}",
            text.len(),
            document_type,
            fields.len(),
            start.elapsed()
        );

        DocumentAnalysis::new(document_type, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RuleError, StrError};
    use crate::models::config::{CategoryDefinition, FieldRuleDefinition};
    use crate::models::document::{Classification, FieldValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_estamp_scenario() {
        let text = "Certificate No: 12345\nPurchased By: Jane Doe\nProperty Description: Flat 4B\nFirst Party: A\nSecond Party: B";
        let analysis = DocumentPipeline::default().analyze(text);

        assert_eq!(analysis.document_type.label(), "E-Stamp");
        assert_eq!(analysis.fields.get("Certificate No.").unwrap().as_str(), "12345");
        assert_eq!(analysis.fields.get("Purchased By").unwrap().as_str(), "Jane Doe");
        assert_eq!(analysis.fields.get("Property Description").unwrap().as_str(), "Flat 4B");
        assert_eq!(analysis.property_description.as_str(), "Flat 4B");
    }

    #[test]
    fn test_unmatched_text_scenario() {
        let analysis = DocumentPipeline::default().analyze("lorem ipsum dolor sit amet");

        assert_eq!(analysis.document_type, Classification::Unknown);
        assert!(analysis.fields.is_empty());
        assert_eq!(analysis.property_description, FieldValue::NotFound);
    }

    #[test]
    fn test_sale_deed_scenario() {
        let text = "SALE DEED\nDated 5th June 2018\nBetween John Smith and Jane Roe\nFile No. 2018/77, Day Book No 4512\nSale Deed No: 3344/2018";
        let analysis = DocumentPipeline::default().analyze(text);

        assert_eq!(analysis.document_type.label(), "Sale Deed");
        assert_eq!(analysis.fields.get("Between").unwrap().as_str(), "John Smith");
        assert_eq!(analysis.property_description, FieldValue::NotFound);
    }

    #[test]
    fn test_configured_category() {
        let mut config = StrConfig::default();
        config.categories.push(CategoryDefinition {
            name: "Lease Deed".to_string(),
            keywords: vec!["Lessor".to_string(), "Lessee".to_string(), "Monthly Rent".to_string()],
            fields: vec![
                FieldRuleDefinition {
                    label: "Lessor".to_string(),
                    pattern: r"lessor\s*[:\-]?\s*([^\n]+)".to_string(),
                },
                FieldRuleDefinition {
                    label: "Monthly Rent".to_string(),
                    pattern: r"monthly\s*rent\s*[:\-]?\s*([^\n]+)".to_string(),
                },
            ],
        });

        let pipeline = DocumentPipeline::from_config(&config).unwrap();
        let analysis = pipeline.analyze("LEASE\nLessor: K. Iyer\nLessee: M. Rao\nMonthly Rent: Rs. 25,000");

        assert_eq!(analysis.document_type.label(), "Lease Deed");
        assert_eq!(analysis.fields.get("Lessor").unwrap().as_str(), "K. Iyer");
        assert_eq!(analysis.fields.get("Monthly Rent").unwrap().as_str(), "Rs. 25,000");
    }

    #[test]
    fn test_configured_invalid_pattern_fails_at_construction() {
        let mut config = StrConfig::default();
        config.categories.push(CategoryDefinition {
            name: "Broken".to_string(),
            keywords: vec!["broken".to_string()],
            fields: vec![FieldRuleDefinition {
                label: "Value".to_string(),
                pattern: "([unclosed".to_string(),
            }],
        });

        let err = DocumentPipeline::from_config(&config).unwrap_err();
        assert!(matches!(err, StrError::Rule(RuleError::InvalidPattern { .. })));
    }

    #[test]
    fn test_configured_threshold() {
        let mut config = StrConfig::default();
        config.classification.min_keyword_matches = 1;
        let pipeline = DocumentPipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.analyze("purchased by someone").document_type.label(), "E-Stamp");
    }
}
