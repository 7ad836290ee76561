//! Document-level types.

use super::ProductSection;
use crate::detect::Dialect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// In-band warnings for data-quality problems.
///
/// These are not errors: they are rendered into the output so the caller
/// can tell from the text itself that extraction fell short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentinel {
    /// No line started a product section.
    NoProductsDetected,
    /// The header-anchored dialect found no Description/SKU/Quantity header.
    NoDetailSections,
    /// A section was found but none of its lines matched.
    NoSpecsExtracted,
}

impl Sentinel {
    /// The warning text written to the output.
    pub fn message(&self) -> &'static str {
        match self {
            Sentinel::NoProductsDetected => "No products detected.",
            Sentinel::NoDetailSections => "Could not find product detail sections.",
            Sentinel::NoSpecsExtracted => "No specifications extracted.",
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A parsed quote: the detected product sections, or a sentinel when no
/// section could be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDocument {
    /// Dialect the text was parsed as
    pub dialect: Dialect,

    /// Product sections in source order
    pub sections: Vec<ProductSection>,

    /// Set when no section was detected; `sections` is then empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<Sentinel>,
}

impl QuoteDocument {
    /// Create a document from detected sections. An empty list becomes the
    /// `NoProductsDetected` sentinel.
    pub fn new(dialect: Dialect, sections: Vec<ProductSection>) -> Self {
        if sections.is_empty() {
            return Self::sentinel(dialect, Sentinel::NoProductsDetected);
        }
        Self {
            dialect,
            sections,
            sentinel: None,
        }
    }

    /// Create a document that only carries a sentinel.
    pub fn sentinel(dialect: Dialect, sentinel: Sentinel) -> Self {
        Self {
            dialect,
            sections: Vec::new(),
            sentinel: Some(sentinel),
        }
    }

    /// True when no product was detected.
    pub fn is_sentinel(&self) -> bool {
        self.sentinel.is_some()
    }

    /// Number of product sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineItem;

    #[test]
    fn test_empty_sections_become_sentinel() {
        let doc = QuoteDocument::new(Dialect::FreeformSkuQuantity, Vec::new());
        assert!(doc.is_sentinel());
        assert_eq!(doc.sentinel, Some(Sentinel::NoProductsDetected));
        assert_eq!(doc.section_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut first = ProductSection::new("Precision 5570", 1);
        first.push(LineItem::new("16GB RAM", 1));
        first.push(LineItem::new("512GB SSD", 1));
        let second = ProductSection::new("OptiPlex 7010", 2);

        let doc = QuoteDocument::new(Dialect::TabModuleTable, vec![first, second]);
        assert!(!doc.is_sentinel());
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.item_count(), 2);
    }

    #[test]
    fn test_sentinel_messages() {
        assert_eq!(
            Sentinel::NoDetailSections.to_string(),
            "Could not find product detail sections."
        );
        assert!(Sentinel::NoProductsDetected
            .message()
            .contains("No products detected"));
    }
}
