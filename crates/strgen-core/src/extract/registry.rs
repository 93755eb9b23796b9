//! Category name to rule set lookup.

use std::collections::HashMap;
use std::sync::Arc;

use super::rules::{cidco, commencement, deed, estamp, flat, ExtractionRuleSet};
use crate::models::category::{
    AGREEMENT_TO_FLAT, AGREEMENT_TO_SALE, CIDCO_CERTIFICATE, COMMENCEMENT_CERTIFICATE, E_STAMP,
    SALE_DEED,
};

/// Rule sets keyed by category name.
///
/// Several categories may share one rule set; the built-in Sale Deed and
/// Agreement to Sale entries do.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    sets: HashMap<String, Arc<ExtractionRuleSet>>,
}

impl RuleRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rule sets for the built-in categories.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(E_STAMP, Arc::clone(&estamp::RULES));
        registry.register(AGREEMENT_TO_FLAT, Arc::clone(&flat::RULES));
        registry.register(COMMENCEMENT_CERTIFICATE, Arc::clone(&commencement::RULES));
        registry.register(CIDCO_CERTIFICATE, Arc::clone(&cidco::RULES));
        registry.register(SALE_DEED, Arc::clone(&deed::RULES));
        registry.register(AGREEMENT_TO_SALE, Arc::clone(&deed::RULES));
        registry
    }

    /// Register `rules` for `category`, replacing any previous entry.
    pub fn register(&mut self, category: impl Into<String>, rules: Arc<ExtractionRuleSet>) {
        self.sets.insert(category.into(), rules);
    }

    pub fn get(&self, category: &str) -> Option<&ExtractionRuleSet> {
        self.sets.get(category).map(Arc::as_ref)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.sets.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
