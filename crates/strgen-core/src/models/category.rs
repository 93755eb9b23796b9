//! Document categories and the keyword catalog used for classification.

use lazy_static::lazy_static;
use regex::Regex;

use super::document::UNKNOWN;
use crate::error::RuleError;

pub const E_STAMP: &str = "E-Stamp";
pub const AGREEMENT_TO_FLAT: &str = "Agreement to Flat (Kararnama)";
pub const COMMENCEMENT_CERTIFICATE: &str = "Commencement Certificate";
pub const CIDCO_CERTIFICATE: &str = "CIDCO Certificate";
pub const SALE_DEED: &str = "Sale Deed";
pub const AGREEMENT_TO_SALE: &str = "Agreement to Sale";

/// Built-in categories with their keywords, in catalog order.
pub const BUILTIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        E_STAMP,
        &[
            "Certificate No",
            "Certificate Issue Date",
            "Unique Document Reference",
            "Purchased By",
            "Property Description",
            "First Party",
            "Second Party",
        ],
    ),
    (
        AGREEMENT_TO_FLAT,
        &[
            "Dated",
            "Between",
            "AND",
            "Certificate No",
            "Flat No",
            "Sale Agreement",
            "Sale Deed",
            "Agreement Date",
            "Kararnama",
        ],
    ),
    (
        COMMENCEMENT_CERTIFICATE,
        &[
            "Application No",
            "Dated",
            "Plot No",
            "Situated at",
            "Building Commencement",
            "Commencement Certificate",
        ],
    ),
    (
        CIDCO_CERTIFICATE,
        &[
            "CIDCO No",
            "Date",
            "Tenement Number",
            "Tenement Transfer Order",
            "Challan No",
            "House No",
            "Name",
        ],
    ),
    (
        SALE_DEED,
        &[
            "Dated",
            "Between",
            "AND",
            "Certificate No",
            "File No",
            "Day Book No",
            "Schedule C",
            "Schedule D",
            "Sale Deed No",
            "Sale Deed Date",
        ],
    ),
    (
        AGREEMENT_TO_SALE,
        &[
            "Dated",
            "Certificate No",
            "File No",
            "Day Book No",
            "Schedule C",
            "Schedule D",
            "Sale Deed No",
            "Sale Deed Date",
            "BETWEEN",
            "SPECIFICATIONS",
            "VENDOR",
            "PURCHASER",
        ],
    ),
];

lazy_static! {
    static ref BUILTIN_CATALOG: Catalog = {
        let mut catalog = Catalog::empty();
        for (name, keywords) in BUILTIN_KEYWORDS {
            let category = DocumentCategory::new(*name, keywords.iter().copied())
                .expect("built-in keywords are valid");
            catalog.push(category).expect("built-in names are unique");
        }
        catalog
    };
}

/// A keyword phrase with its whole-word matcher.
#[derive(Debug, Clone)]
pub struct Keyword {
    phrase: String,
    matcher: Regex,
}

impl Keyword {
    /// Compile a keyword for whole-word matching against lower-cased text.
    pub fn new(phrase: impl Into<String>) -> Result<Self, regex::Error> {
        let phrase = phrase.into();
        let matcher = Regex::new(&format!(r"\b{}\b", regex::escape(&phrase.to_lowercase())))?;
        Ok(Self { phrase, matcher })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Whether the keyword occurs in `lowered` as a whole word.
    ///
    /// `lowered` must already be lower-cased.
    pub fn is_present_in(&self, lowered: &str) -> bool {
        self.matcher.is_match(lowered)
    }
}

/// A document category: a name and the keywords signalling it.
#[derive(Debug, Clone)]
pub struct DocumentCategory {
    name: String,
    keywords: Vec<Keyword>,
}

impl DocumentCategory {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name == UNKNOWN {
            return Err(RuleError::ReservedName(name));
        }

        let keywords = keywords
            .into_iter()
            .map(|phrase| {
                let phrase = phrase.into();
                Keyword::new(phrase.clone()).map_err(|source| RuleError::InvalidPattern {
                    category: name.clone(),
                    label: phrase,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if keywords.is_empty() {
            return Err(RuleError::NoKeywords(name));
        }

        Ok(Self { name, keywords })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Keywords present at least once in `lowered`, in declaration order.
    pub fn matched_keywords<'a>(&'a self, lowered: &str) -> Vec<&'a str> {
        self.keywords
            .iter()
            .filter(|k| k.is_present_in(lowered))
            .map(Keyword::phrase)
            .collect()
    }
}

/// Ordered set of categories. Order decides classification ties.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<DocumentCategory>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The six built-in property document categories.
    pub fn builtin() -> Self {
        BUILTIN_CATALOG.clone()
    }

    /// Append a category after the existing ones.
    pub fn push(&mut self, category: DocumentCategory) -> Result<(), RuleError> {
        if self.get(category.name()).is_some() {
            return Err(RuleError::DuplicateCategory(category.name().to_string()));
        }
        self.categories.push(category);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DocumentCategory> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentCategory> {
        self.categories.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(DocumentCategory::name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
