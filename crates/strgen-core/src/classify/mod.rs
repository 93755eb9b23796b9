//! Keyword-based document classification.

mod classifier;

pub use classifier::Classifier;

use serde::Serialize;

/// Keyword evidence for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    /// Category name.
    pub category: String,
    /// Distinct keywords present in the text.
    pub matches: usize,
    /// The keywords that matched, in declaration order.
    pub matched_keywords: Vec<String>,
}
