//! JSON rendering for parsed quotes.

use crate::error::{Error, Result};
use crate::model::QuoteDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a parsed quote to JSON.
pub fn to_json(doc: &QuoteDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Dialect;
    use crate::model::{LineItem, ProductSection, Sentinel};

    fn document() -> QuoteDocument {
        let mut section = ProductSection::new("XPS 13 9340", 2);
        section.push(LineItem::new("16GB Memory", 2).with_sku("370-AHCL"));
        QuoteDocument::new(Dialect::FreeformSkuQuantity, vec![section])
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"freeform-sku-quantity\""));
        assert!(json.contains("370-AHCL"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&document(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sections"][0]["base_quantity"], 2);
    }

    #[test]
    fn test_sentinel_in_json() {
        let doc = QuoteDocument::sentinel(Dialect::SpaceDelimitedTable, Sentinel::NoProductsDetected);
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"no-products-detected\""));
    }
}
