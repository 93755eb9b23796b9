//! Agreement to Flat (Kararnama) fields: parties, flat and its boundaries.

use std::sync::Arc;

use lazy_static::lazy_static;

use super::ExtractionRuleSet;
use crate::models::category::AGREEMENT_TO_FLAT;

pub const PATTERNS: &[(&str, &str)] = &[
    ("SELLER", r"seller[:\s]*([^\n]+)"),
    ("BUYER", r"buyer[:\s]*([^\n]+)"),
    ("Flat No", r"flat no[:\s]*([^\n]+)"),
    ("Address", r"address[:\s]*([^\n]+)"),
    ("Area", r"area[:\s]*([^\n]+)"),
    ("North", r"north[:\s]*([^\n]+)"),
    ("South", r"south[:\s]*([^\n]+)"),
    ("East", r"east[:\s]*([^\n]+)"),
    ("West", r"west[:\s]*([^\n]+)"),
];

lazy_static! {
    pub static ref RULES: Arc<ExtractionRuleSet> = Arc::new(
        ExtractionRuleSet::compile(AGREEMENT_TO_FLAT, PATTERNS.iter().copied()).unwrap()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_agreement_fields() {
        let text = "KARARNAMA\nSeller: Ramesh Patil\nBuyer: Sunita Rao\nFlat No: B-204\nArea: 650 sq. ft.\nNorth: Road\nSouth: Flat B-203\nEast: Open Space\nWest: Staircase";
        let fields = RULES.extract(text);

        assert_eq!(fields.get("SELLER").unwrap().as_str(), "Ramesh Patil");
        assert_eq!(fields.get("BUYER").unwrap().as_str(), "Sunita Rao");
        assert_eq!(fields.get("Flat No").unwrap().as_str(), "B-204");
        assert_eq!(fields.get("Area").unwrap().as_str(), "650 sq. ft.");
        assert_eq!(fields.get("North").unwrap().as_str(), "Road");
        assert_eq!(fields.get("South").unwrap().as_str(), "Flat B-203");
        assert_eq!(fields.get("East").unwrap().as_str(), "Open Space");
        assert_eq!(fields.get("West").unwrap().as_str(), "Staircase");
        assert_eq!(fields.get("Address").unwrap().as_str(), "Not Found");
    }

    #[test]
    fn test_flat_no_requires_single_space() {
        let fields = RULES.extract("Flat  No: 12");
        assert_eq!(fields.get("Flat No").unwrap().as_str(), "Not Found");
    }
}
