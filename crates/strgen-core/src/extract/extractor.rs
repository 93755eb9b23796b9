//! Field extraction by category.

use tracing::debug;

use super::registry::RuleRegistry;
use crate::models::document::{Classification, FieldMap};

/// Applies the rule set registered for a document's category.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    registry: RuleRegistry,
}

impl FieldExtractor {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Extract fields for a classified document.
    ///
    /// `Unknown` and categories without rules give an empty map.
    pub fn extract(&self, text: &str, classification: &Classification) -> FieldMap {
        match classification.category() {
            Some(category) => self.extract_for(text, category),
            None => FieldMap::new(),
        }
    }

    /// Extract fields using the rules of the named category.
    pub fn extract_for(&self, text: &str, category: &str) -> FieldMap {
        let Some(rules) = self.registry.get(category) else {
            debug!("No extraction rules registered for {}", category);
            return FieldMap::new();
        };

        let fields = rules.extract(text);
        debug!(
            "Extracted {}/{} fields for {}",
            fields.found_count(),
            fields.len(),
            category
        );
        fields
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(RuleRegistry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_gives_empty_map() {
        let extractor = FieldExtractor::default();
        let text = "Certificate No: 12345\nPurchased By: Jane Doe";
        assert!(extractor.extract(text, &Classification::Unknown).is_empty());
    }

    #[test]
    fn test_unregistered_category_gives_empty_map() {
        let extractor = FieldExtractor::default();
        let fields = extractor.extract("Lessor: A", &Classification::from("Lease Deed"));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let extractor = FieldExtractor::default();
        let text = "Between John Smith and Jane Roe, Dated 1 May 2020";
        let category = Classification::from("Sale Deed");

        let first = extractor.extract(text, &category);
        let second = extractor.extract(text, &category);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_label_case_does_not_change_value() {
        let extractor = FieldExtractor::default();
        let category = Classification::from("E-Stamp");

        for text in [
            "Purchased By: Jane DOE",
            "PURCHASED BY: Jane DOE",
            "purchased by: Jane DOE",
        ] {
            let fields = extractor.extract(text, &category);
            assert_eq!(
                fields.get("Purchased By"),
                Some(&FieldValue::Found("Jane DOE".to_string()))
            );
        }
    }

    #[test]
    fn test_agreement_to_sale_uses_deed_rules() {
        let extractor = FieldExtractor::default();
        let fields = extractor.extract_for("Sale Deed No: 77, Vendor X", "Agreement to Sale");
        assert_eq!(fields.get("Sale Deed No").unwrap().as_str(), "77");
    }
}
