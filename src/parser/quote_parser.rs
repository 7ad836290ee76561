//! Quote parser: line normalization followed by dialect dispatch.

use super::lines::normalize_lines;
use super::options::ParseOptions;
use super::strategy::strategy_for;
use crate::detect::Dialect;
use crate::model::QuoteDocument;

/// Quote parser.
///
/// Holds no state between calls; one parser can format any number of
/// documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct QuoteParser {
    options: ParseOptions,
}

impl QuoteParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse raw quote text as the given dialect.
    ///
    /// Never fails: malformed lines are dropped, and a quote with no
    /// detectable products yields a sentinel document.
    pub fn parse(&self, text: &str, dialect: Dialect) -> QuoteDocument {
        let strategy = strategy_for(dialect);

        let mut noise = self.options.noise.clone();
        if strategy.needs_sku_lines() {
            noise.strip_sku_lines = false;
        }
        let lines = normalize_lines(text, &noise);

        let sections = strategy.extract(&lines, &self.options);
        if sections.is_empty() {
            let sentinel = strategy.missing_sections();
            log::warn!("{}: {}", dialect, sentinel);
            return QuoteDocument::sentinel(dialect, sentinel);
        }

        for section in sections.iter().filter(|s| s.is_empty()) {
            log::warn!("{}: no items extracted for '{}'", dialect, section.title);
        }
        log::debug!(
            "{}: {} sections, {} items",
            dialect,
            sections.len(),
            sections.iter().map(|s| s.items.len()).sum::<usize>()
        );

        QuoteDocument::new(dialect, sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sentinel;
    use crate::parser::NoiseFilter;

    #[test]
    fn test_parse_tab_table() {
        let text = "Base\tPrecision 5570\t210-ABCD\t999-WXYZ\t1\n\
                    Memory\t16GB RAM\t210-EFGH\t999-UVWX\t1\n";
        let doc = QuoteParser::new().parse(text, Dialect::TabModuleTable);
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "Precision 5570");
        assert_eq!(doc.item_count(), 1);
    }

    #[test]
    fn test_parse_without_triggers() {
        let doc = QuoteParser::new().parse("just some text", Dialect::SpaceDelimitedTable);
        assert_eq!(doc.sentinel, Some(Sentinel::NoProductsDetected));
    }

    #[test]
    fn test_parse_header_table_without_header() {
        let doc = QuoteParser::new().parse("Precision 3680\n338-CNXR", Dialect::HeaderAnchoredTable);
        assert_eq!(doc.sentinel, Some(Sentinel::NoDetailSections));
    }

    #[test]
    fn test_freeform_keeps_sku_lines() {
        let options = ParseOptions::new()
            .with_noise_filter(NoiseFilter::default().with_sku_lines_stripped(true));
        let text = "Latitude 7440\n16GB Memory\n370-AHCL\n2\n";
        let doc = QuoteParser::with_options(options).parse(text, Dialect::FreeformSkuQuantity);
        assert_eq!(doc.item_count(), 1);
    }
}
