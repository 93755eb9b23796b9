//! Category-specific field extraction.

mod extractor;
mod registry;
pub mod rules;

pub use extractor::FieldExtractor;
pub use registry::RuleRegistry;
pub use rules::{ExtractionRuleSet, FieldRule};
