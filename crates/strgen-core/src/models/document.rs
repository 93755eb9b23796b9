//! Per-document values: recognized text, classification and extracted fields.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Label reported when no category reaches the keyword threshold.
pub const UNKNOWN: &str = "Unknown";

/// Value reported for a field whose rule did not match.
pub const NOT_FOUND: &str = "Not Found";

/// Field surfaced next to the field map for every document.
pub const PROPERTY_DESCRIPTION: &str = "Property Description";

/// Text recognized from one document.
///
/// Pages are joined by a blank line and the result is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecognizedText(String);

impl RecognizedText {
    /// Wrap already-recognized text, trimming surrounding whitespace.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    /// Join per-page text the way a multi-page scan is assembled.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for page in pages {
            text.push_str(page.as_ref());
            text.push_str("\n\n");
        }
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RecognizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecognizedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for RecognizedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for RecognizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of classifying a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A catalog category, by name.
    Category(String),
    /// No category reached the keyword threshold.
    Unknown,
}

impl Classification {
    /// Category name, or `Unknown`.
    pub fn label(&self) -> &str {
        match self {
            Self::Category(name) => name,
            Self::Unknown => UNKNOWN,
        }
    }

    /// Category name if the document was recognized.
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Category(name) => Some(name),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl From<&str> for Classification {
    fn from(label: &str) -> Self {
        if label == UNKNOWN {
            Self::Unknown
        } else {
            Self::Category(label.to_string())
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A single extracted field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Trimmed text captured by the field's rule.
    Found(String),
    /// The rule did not match.
    NotFound,
}

impl FieldValue {
    /// Captured text, or the `Not Found` sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(value) => value,
            Self::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Captured text if the rule matched.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(Self::Found).unwrap_or(Self::NotFound)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Extracted fields in rule declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Store a value. A repeated label keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, value: FieldValue) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// Value for `label`, treating an absent label like an unmatched rule.
    pub fn value_or_not_found(&self, label: &str) -> FieldValue {
        self.get(label).cloned().unwrap_or(FieldValue::NotFound)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields whose rule matched.
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_found()).count()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Classification and extracted fields for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentAnalysis {
    /// Chosen category or `Unknown`.
    pub document_type: Classification,

    /// Fields extracted with the category's rules.
    pub fields: FieldMap,

    /// The `Property Description` field, surfaced for the summary.
    pub property_description: FieldValue,
}

impl DocumentAnalysis {
    pub fn new(document_type: Classification, fields: FieldMap) -> Self {
        let property_description = fields.value_or_not_found(PROPERTY_DESCRIPTION);
        Self {
            document_type,
            fields,
            property_description,
        }
    }
}
