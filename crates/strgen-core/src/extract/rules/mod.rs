//! Labeled field rules and the built-in per-category rule tables.
//!
//! Two rule families exist. Stamp, flat agreement and CIDCO rules capture up
//! to the end of the line. Deed and commencement rules also stop at a comma,
//! and the deed `Between` rule captures up to the last `and` before it.

pub mod cidco;
pub mod commencement;
pub mod deed;
pub mod estamp;
pub mod flat;

use regex::Regex;

use crate::error::RuleError;
use crate::models::document::{FieldMap, FieldValue};

/// A field label and the pattern capturing its value.
#[derive(Debug, Clone)]
pub struct FieldRule {
    label: String,
    pattern: Regex,
}

impl FieldRule {
    /// Compile a rule. Matching is always case-insensitive.
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            label: label.into(),
            pattern: Regex::new(&format!("(?i){pattern}"))?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value from the first match: the first capture group, or the whole
    /// match for patterns without groups, trimmed.
    pub fn apply(&self, text: &str) -> FieldValue {
        let group = usize::from(self.pattern.captures_len() > 1);

        self.pattern
            .captures(text)
            .map(|caps| {
                let value = caps.get(group).map_or("", |m| m.as_str());
                FieldValue::Found(value.trim().to_string())
            })
            .unwrap_or(FieldValue::NotFound)
    }
}

/// Ordered field rules for one category.
#[derive(Debug, Clone, Default)]
pub struct ExtractionRuleSet {
    rules: Vec<FieldRule>,
}

impl ExtractionRuleSet {
    /// Compile `(label, pattern)` pairs for `category`.
    pub fn compile<I, L, P>(category: &str, definitions: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (L, P)>,
        L: Into<String>,
        P: AsRef<str>,
    {
        let rules = definitions
            .into_iter()
            .map(|(label, pattern)| {
                let label = label.into();
                FieldRule::new(label.clone(), pattern.as_ref()).map_err(|source| {
                    RuleError::InvalidPattern {
                        category: category.to_string(),
                        label,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Apply every rule in declaration order.
    pub fn extract(&self, text: &str) -> FieldMap {
        let mut fields = FieldMap::with_capacity(self.rules.len());
        for rule in &self.rules {
            fields.insert(rule.label(), rule.apply(text));
        }
        fields
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(FieldRule::label)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
