//! Sale Deed and Agreement to Sale fields.
//!
//! Both categories use this table. Values stop at a comma as well as at the
//! end of the line, and `Between` stops before the `and` joining the parties.

use std::sync::Arc;

use lazy_static::lazy_static;

use super::ExtractionRuleSet;
use crate::models::category::SALE_DEED;

pub const PATTERNS: &[(&str, &str)] = &[
    ("Dated", r"dated[\.:,-]?\s*([^\n,]+)"),
    ("Between", r"between[\.:,-]?\s*([^\n,]+)\s*and"),
    ("AND", r"and[\.:,-]?\s*([^\n,]+)"),
    ("Certificate No", r"certificate\s*no[\.:,-]?\s*([^\n,]+)"),
    ("File No", r"file\s*no[\.:,-]?\s*([^\n,]+)"),
    ("Day Book No", r"day\s*book\s*no[\.:,-]?\s*([^\n,]+)"),
    ("Schedule C", r"schedule\s*c[\.:,-]?\s*([^\n,]+)"),
    ("Schedule D", r"schedule\s*d[\.:,-]?\s*([^\n,]+)"),
    ("Sale Deed No", r"sale\s*deed\s*no[\.:,-]?\s*([^\n,]+)"),
    ("Sale Deed Date", r"sale\s*deed\s*date[\.:,-]?\s*([^\n,]+)"),
];

lazy_static! {
    pub static ref RULES: Arc<ExtractionRuleSet> =
        Arc::new(ExtractionRuleSet::compile(SALE_DEED, PATTERNS.iter().copied()).unwrap());
}
