//! CIDCO tenement certificate fields.

use std::sync::Arc;

use lazy_static::lazy_static;

use super::ExtractionRuleSet;
use crate::models::category::CIDCO_CERTIFICATE;

pub const PATTERNS: &[(&str, &str)] = &[
    ("Mr./Mrs.", r"(?:mr\.|mrs\.)\s*[:\-]?\s*([^\n]+)"),
    ("CIDCO No", r"cidco\s*no\s*[:\-]?\s*([^\n]+)"),
    ("Date", r"date\s*[:\-]?\s*([^\n]+)"),
    ("Shri/Smt.", r"(?:shri|smt)\.\s*[:\-]?\s*([^\n]+)"),
    ("House No", r"house\s*no\s*[:\-]?\s*([^\n]+)"),
    ("Letter No.", r"letter\s*no\.\s*[:\-]?\s*([^\n]+)"),
    ("Challan No.", r"challan\s*no\s*[:\-]?\s*([^\n]+)"),
];

lazy_static! {
    pub static ref RULES: Arc<ExtractionRuleSet> = Arc::new(
        ExtractionRuleSet::compile(CIDCO_CERTIFICATE, PATTERNS.iter().copied()).unwrap()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cidco_fields() {
        let text = "CIDCO No: CIDCO/EM/2015/889\nDate: 12/03/2015\nMr. Anil Kumar Shah\nShri. Prakash Deshmukh\nHouse No - 14/B\nLetter No. TTO/119\nChallan No 55612";
        let fields = RULES.extract(text);

        let labels: Vec<_> = fields.labels().collect();
        assert_eq!(
            labels,
            vec!["Mr./Mrs.", "CIDCO No", "Date", "Shri/Smt.", "House No", "Letter No.", "Challan No."]
        );
        assert_eq!(fields.get("Mr./Mrs.").unwrap().as_str(), "Anil Kumar Shah");
        assert_eq!(fields.get("CIDCO No").unwrap().as_str(), "CIDCO/EM/2015/889");
        assert_eq!(fields.get("Date").unwrap().as_str(), "12/03/2015");
        assert_eq!(fields.get("Shri/Smt.").unwrap().as_str(), "Prakash Deshmukh");
        assert_eq!(fields.get("House No").unwrap().as_str(), "14/B");
        assert_eq!(fields.get("Letter No.").unwrap().as_str(), "TTO/119");
        assert_eq!(fields.get("Challan No.").unwrap().as_str(), "55612");
    }

    #[test]
    fn test_letter_no_requires_period() {
        let fields = RULES.extract("Letter No 42");
        assert_eq!(fields.get("Letter No.").unwrap().as_str(), "Not Found");
    }
}
