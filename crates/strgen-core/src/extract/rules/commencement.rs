//! Building Commencement Certificate fields.

use std::sync::Arc;

use lazy_static::lazy_static;

use super::ExtractionRuleSet;
use crate::models::category::COMMENCEMENT_CERTIFICATE;

pub const PATTERNS: &[(&str, &str)] = &[
    ("Application No.", r"application\s*no[\.:,-]?\s*([^\n,]+)"),
    ("Dated", r"dated[\.:,-]?\s*([^\n,]+)"),
    ("Plot No.", r"plot\s*no[\.:,-]?\s*([^\n,]+)"),
    ("Situated at", r"situated\s*at[\.:,-]?\s*([^\n,]+)"),
];

lazy_static! {
    pub static ref RULES: Arc<ExtractionRuleSet> = Arc::new(
        ExtractionRuleSet::compile(COMMENCEMENT_CERTIFICATE, PATTERNS.iter().copied()).unwrap()
    );
}
