//! Whole-word keyword classifier over a category catalog.

use tracing::debug;

use crate::models::category::Catalog;
use crate::models::document::Classification;

use super::CategoryScore;

/// Default number of distinct keywords a category needs.
pub const DEFAULT_MIN_MATCHES: usize = 2;

/// Picks the catalog category with the most distinct keyword matches.
///
/// A category needs at least `min_matches` distinct keywords to be a
/// candidate. Among candidates the highest count wins; equal counts go to the
/// category declared first in the catalog.
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Catalog,
    min_matches: usize,
}

impl Classifier {
    /// Create a classifier over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            min_matches: DEFAULT_MIN_MATCHES,
        }
    }

    /// Set the candidate threshold. Values below 1 are raised to 1.
    pub fn with_min_matches(mut self, min_matches: usize) -> Self {
        self.min_matches = min_matches.max(1);
        self
    }

    pub fn min_matches(&self) -> usize {
        self.min_matches
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Keyword evidence for every category, in catalog order.
    pub fn score(&self, text: &str) -> Vec<CategoryScore> {
        let lowered = text.to_lowercase();

        self.catalog
            .iter()
            .map(|category| {
                let matched: Vec<String> = category
                    .matched_keywords(&lowered)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                CategoryScore {
                    category: category.name().to_string(),
                    matches: matched.len(),
                    matched_keywords: matched,
                }
            })
            .collect()
    }

    /// Classify recognized text.
    pub fn classify(&self, text: &str) -> Classification {
        let scores = self.score(text);

        let mut best: Option<&CategoryScore> = None;
        for score in scores.iter().filter(|s| s.matches >= self.min_matches) {
            // Strictly greater keeps the earlier category on ties.
            if best.is_none_or(|b| score.matches > b.matches) {
                best = Some(score);
            }
        }

        match best {
            Some(score) => {
                debug!(
                    "Classified as {} with {} keyword matches: {:?}",
                    score.category, score.matches, score.matched_keywords
                );
                Classification::Category(score.category.clone())
            }
            None => {
                debug!(
                    "No category reached {} keyword matches, classified as Unknown",
                    self.min_matches
                );
                Classification::Unknown
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::DocumentCategory;
    use pretty_assertions::assert_eq;

    fn custom_catalog() -> Catalog {
        let mut catalog = Catalog::empty();
        catalog
            .push(DocumentCategory::new("Alpha", ["red", "green", "blue"]).unwrap())
            .unwrap();
        catalog
            .push(DocumentCategory::new("Beta", ["red", "green", "yellow"]).unwrap())
            .unwrap();
        catalog
    }

    #[test]
    fn test_no_matches_is_unknown() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("lorem ipsum dolor sit amet"), Classification::Unknown);
        assert_eq!(classifier.classify(""), Classification::Unknown);
    }

    #[test]
    fn test_estamp_scenario() {
        let text = "Certificate No: 12345\nPurchased By: Jane Doe\nProperty Description: Flat 4B\nFirst Party: A\nSecond Party: B";
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(text).label(), "E-Stamp");
    }

    #[test]
    fn test_below_threshold_is_unknown() {
        let classifier = Classifier::default();
        // Only "Purchased By" from E-Stamp.
        assert_eq!(classifier.classify("purchased by someone"), Classification::Unknown);
        assert_eq!(
            classifier.clone().with_min_matches(1).classify("purchased by someone").label(),
            "E-Stamp"
        );
    }

    #[test]
    fn test_presence_not_frequency() {
        let classifier = Classifier::new(custom_catalog());
        let scores = classifier.score("red red red red green");
        assert_eq!(scores[0].matches, 2);
        assert_eq!(scores[0].matched_keywords, vec!["red", "green"]);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let classifier = Classifier::new(custom_catalog());
        assert_eq!(classifier.classify("red and green").label(), "Alpha");
        assert_eq!(classifier.classify("red green yellow").label(), "Beta");
    }

    #[test]
    fn test_whole_word_matching() {
        let mut catalog = Catalog::empty();
        catalog
            .push(DocumentCategory::new("Cert", ["Certificate No", "Issued"]).unwrap())
            .unwrap();
        let classifier = Classifier::new(catalog);

        assert_eq!(classifier.classify("Certificates No 5, Issued today"), Classification::Unknown);
        assert_eq!(classifier.classify("Certificate No 5, Issued today").label(), "Cert");
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = Classifier::default();
        let text = "SALE DEED NO 44\nday book no 12\nFILE NO 7\nSchedule C the land";
        assert_eq!(classifier.classify(text).label(), "Sale Deed");
    }

    #[test]
    fn test_min_matches_clamped() {
        assert_eq!(Classifier::default().with_min_matches(0).min_matches(), 1);
    }
}
