//! E-Stamp certificate fields.

use std::sync::Arc;

use lazy_static::lazy_static;

use super::ExtractionRuleSet;
use crate::models::category::E_STAMP;

pub const PATTERNS: &[(&str, &str)] = &[
    ("Certificate No.", r"certificate\s*no\.?\s*[:\-]?\s*([^\n]+)"),
    ("Certificate Issued Date", r"certificate\s*issued\s*date\s*[:\-]?\s*([^\n]+)"),
    ("Unique Doc Reference", r"unique\s*document\s*reference\s*[:\-]?\s*([^\n]+)"),
    ("Purchased By", r"purchased\s*by\s*[:\-]?\s*([^\n]+)"),
    ("Property Description", r"property\s*description\s*[:\-]?\s*([^\n]+)"),
    ("First Party", r"first\s*party\s*[:\-]?\s*([^\n]+)"),
    ("Second Party", r"second\s*party\s*[:\-]?\s*([^\n]+)"),
];

lazy_static! {
    pub static ref RULES: Arc<ExtractionRuleSet> =
        Arc::new(ExtractionRuleSet::compile(E_STAMP, PATTERNS.iter().copied()).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_estamp_fields() {
        let text = "Certificate No: 12345\nPurchased By: Jane Doe\nProperty Description: Flat 4B\nFirst Party: A\nSecond Party: B";
        let fields = RULES.extract(text);

        assert_eq!(fields.len(), 7);
        assert_eq!(fields.get("Certificate No.").unwrap().as_str(), "12345");
        assert_eq!(fields.get("Purchased By").unwrap().as_str(), "Jane Doe");
        assert_eq!(fields.get("Property Description").unwrap().as_str(), "Flat 4B");
        assert_eq!(fields.get("First Party").unwrap().as_str(), "A");
        assert_eq!(fields.get("Second Party").unwrap().as_str(), "B");
        assert_eq!(fields.get("Certificate Issued Date").unwrap().as_str(), "Not Found");
    }

    #[test]
    fn test_estamp_label_case_and_dash_separator() {
        let text = "CERTIFICATE NO. - IN-MH12345678\nunique document reference - SUBIN-MHMHSTMP0012";
        let fields = RULES.extract(text);

        assert_eq!(fields.get("Certificate No.").unwrap().as_str(), "IN-MH12345678");
        assert_eq!(
            fields.get("Unique Doc Reference").unwrap().as_str(),
            "SUBIN-MHMHSTMP0012"
        );
    }
}
