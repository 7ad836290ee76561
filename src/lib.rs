//! # quotefmt
//!
//! Vendor quote reformatting library for Rust.
//!
//! This library takes the raw text of a hardware vendor quote (copied out of
//! a PDF, an HTML quote view or a pasted e-mail) and re-emits it as a
//! normalized bullet list: one heading per configured product, one bullet
//! per component, quantities shown relative to the product's base unit count.
//!
//! ## Quick Start
//!
//! ```
//! use quotefmt::{format, Dialect, FormatOptions};
//!
//! fn main() -> quotefmt::Result<()> {
//!     let raw = "Base\tPrecision 5570\t210-ABCD\t999-WXYZ\t1\n\
//!                Memory\t16GB RAM\t210-EFGH\t999-UVWX\t1\n";
//!
//!     let options = FormatOptions::for_dialect(Dialect::TabModuleTable);
//!     let text = format(raw, Dialect::TabModuleTable, &options)?;
//!     assert!(text.contains("### Precision 5570 CTO"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Four input dialects**: tab tables, space-aligned tables,
//!   header-anchored tables, freeform SKU lists
//! - **Noise stripping**: prices, totals and sales boilerplate
//! - **Quantity normalization** relative to the base unit count
//! - **Output**: Markdown or plain bullets, or JSON of the parsed quote
//! - **Dialect sniffing** for unlabelled input

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{sniff_dialect, Dialect};
pub use error::{Error, Result};
pub use model::{LineItem, ProductSection, QuantityMode, QuoteDocument, Sentinel};
pub use parser::{KeywordSet, NoiseFilter, ParseOptions, QuoteParser};
pub use render::{BulletStyle, ExtractionStats, FormatOptions, JsonFormat, RenderResult};

use std::path::Path;

/// Format raw quote text.
///
/// Only a bad dialect tag is an error. Data-quality problems come back
/// in-band: a quote with no detectable products yields the
/// "No products detected." sentinel, and a product with no components is
/// rendered with a "No specifications extracted." line.
///
/// # Example
///
/// ```
/// use quotefmt::{format, Dialect, FormatOptions};
///
/// let text = format("Thank you for your order", Dialect::FreeformSkuQuantity,
///     &FormatOptions::default()).unwrap();
/// assert_eq!(text, "No products detected.");
/// ```
pub fn format(raw_text: &str, dialect: Dialect, options: &FormatOptions) -> Result<String> {
    QuoteFormatter::new()
        .with_format_options(options.clone())
        .format(raw_text, dialect)
}

/// Format raw quote text, taking the dialect as a string tag.
///
/// # Example
///
/// ```
/// use quotefmt::{format_tagged, Error, FormatOptions};
///
/// let result = format_tagged("...", "csv", &FormatOptions::default());
/// assert!(matches!(result, Err(Error::UnsupportedDialect(_))));
/// ```
pub fn format_tagged(raw_text: &str, dialect: &str, options: &FormatOptions) -> Result<String> {
    let dialect: Dialect = dialect.parse()?;
    format(raw_text, dialect, options)
}

/// Format raw quote text with the dialect's conventional preset.
pub fn format_with_defaults(raw_text: &str, dialect: Dialect) -> Result<String> {
    format(raw_text, dialect, &FormatOptions::for_dialect(dialect))
}

/// Read a UTF-8 text file and format it.
///
/// # Example
///
/// ```no_run
/// use quotefmt::{format_file, Dialect, FormatOptions};
///
/// let text = format_file("quote.txt", Dialect::HeaderAnchoredTable,
///     &FormatOptions::default()).unwrap();
/// std::fs::write("quote_formatted.txt", text).unwrap();
/// ```
pub fn format_file<P: AsRef<Path>>(
    path: P,
    dialect: Dialect,
    options: &FormatOptions,
) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    format(&raw, dialect, options)
}

/// Parse raw quote text into its product sections without rendering.
pub fn parse(raw_text: &str, dialect: Dialect) -> QuoteDocument {
    QuoteParser::new().parse(raw_text, dialect)
}

/// Builder for parsing and formatting quotes.
///
/// # Example
///
/// ```
/// use quotefmt::{BulletStyle, Dialect, QuoteFormatter};
///
/// let text = QuoteFormatter::new()
///     .with_bullet_style(BulletStyle::Plain)
///     .with_separator("\n")
///     .format("XPS 13 9340 210-BKHW-2\n16GB Memory 370-AHCL-2", Dialect::FreeformSkuQuantity)?;
/// assert_eq!(text, "### XPS 13 9340\n• 16GB Memory (Qty: 1)");
/// # Ok::<(), quotefmt::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteFormatter {
    parse_options: ParseOptions,
    format_options: FormatOptions,
}

impl QuoteFormatter {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder using a dialect's conventional format preset.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new().with_format_options(FormatOptions::for_dialect(dialect))
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the format options.
    pub fn with_format_options(mut self, options: FormatOptions) -> Self {
        self.format_options = options;
        self
    }

    /// Set the base-unit keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_options = self.parse_options.with_keywords(KeywordSet::new(keywords)?);
        Ok(self)
    }

    /// Emit the base line itself as a bullet.
    pub fn with_base_item(mut self, include: bool) -> Self {
        self.parse_options = self.parse_options.with_base_item(include);
        self
    }

    /// Set the noise filter.
    pub fn with_noise_filter(mut self, filter: NoiseFilter) -> Self {
        self.parse_options = self.parse_options.with_noise_filter(filter);
        self
    }

    /// Set the section separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.format_options = self.format_options.with_separator(separator);
        self
    }

    /// Set the bullet style.
    pub fn with_bullet_style(mut self, style: BulletStyle) -> Self {
        self.format_options = self.format_options.with_bullet_style(style);
        self
    }

    /// Set the title suffix.
    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.format_options = self.format_options.with_title_suffix(suffix);
        self
    }

    /// Set the quantity display mode.
    pub fn with_quantity_mode(mut self, mode: QuantityMode) -> Self {
        self.format_options = self.format_options.with_quantity_mode(mode);
        self
    }

    /// Parse options in use.
    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    /// Format options in use.
    pub fn format_options(&self) -> &FormatOptions {
        &self.format_options
    }

    /// Parse raw text into a quote document.
    pub fn parse(&self, raw_text: &str, dialect: Dialect) -> QuoteDocument {
        QuoteParser::with_options(self.parse_options.clone()).parse(raw_text, dialect)
    }

    /// Parse and render raw text.
    pub fn format(&self, raw_text: &str, dialect: Dialect) -> Result<String> {
        let doc = self.parse(raw_text, dialect);
        render::to_markdown(&doc, &self.format_options)
    }

    /// Parse and render raw text, collecting statistics.
    pub fn format_with_stats(&self, raw_text: &str, dialect: Dialect) -> Result<RenderResult> {
        let doc = self.parse(raw_text, dialect);
        render::to_markdown_with_stats(&doc, &self.format_options)
    }

    /// Parse raw text and serialize the quote document as JSON.
    pub fn to_json(&self, raw_text: &str, dialect: Dialect, format: JsonFormat) -> Result<String> {
        let doc = self.parse(raw_text, dialect);
        render::to_json(&doc, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TAB_QUOTE: &str = "Base\tPrecision 5570\t210-ABCD\t999-WXYZ\t1\n\
                             Memory\t16GB RAM\t210-EFGH\t999-UVWX\t1\n";

    #[test]
    fn test_format_tab_table() {
        let text = format_with_defaults(TAB_QUOTE, Dialect::TabModuleTable).unwrap();
        assert_eq!(text, "### Precision 5570 CTO\n• Memory: 16GB RAM (Qty: 1)");
    }

    #[test]
    fn test_format_tagged_unknown_dialect() {
        let result = format_tagged(TAB_QUOTE, "spreadsheet", &FormatOptions::default());
        assert!(matches!(result, Err(Error::UnsupportedDialect(ref tag)) if tag == "spreadsheet"));
    }

    #[test]
    fn test_format_tagged_alias() {
        let text = format_tagged(TAB_QUOTE, "tab", &FormatOptions::default()).unwrap();
        assert!(text.starts_with("### Precision 5570\n"));
    }

    #[test]
    fn test_format_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TAB_QUOTE.as_bytes()).unwrap();

        let options = FormatOptions::for_dialect(Dialect::TabModuleTable);
        let text = format_file(file.path(), Dialect::TabModuleTable, &options).unwrap();
        assert!(text.contains("Memory: 16GB RAM (Qty: 1)"));
    }

    #[test]
    fn test_format_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = format_file(
            dir.path().join("missing.txt"),
            Dialect::TabModuleTable,
            &FormatOptions::default(),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_builder_empty_keywords_rejected() {
        let result = QuoteFormatter::new().with_keywords(Vec::<String>::new());
        assert!(matches!(result, Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_builder_custom_keywords() {
        let formatter = QuoteFormatter::new()
            .with_keywords(["Vostro"])
            .unwrap()
            .with_separator("\n");
        let text = formatter
            .format(
                "Vostro 3030 Desktop\n8GB Memory 370-AHCL-1",
                Dialect::FreeformSkuQuantity,
            )
            .unwrap();
        assert_eq!(text, "### Vostro 3030 Desktop\n- **8GB Memory** *(Qty: 1)*");
    }

    #[test]
    fn test_builder_with_stats() {
        let result = QuoteFormatter::for_dialect(Dialect::TabModuleTable)
            .format_with_stats(TAB_QUOTE, Dialect::TabModuleTable)
            .unwrap();
        assert_eq!(result.stats.section_count, 1);
        assert_eq!(result.stats.item_count, 1);
        assert_eq!(result.stats.line_count, 2);
    }

    #[test]
    fn test_parse_without_render() {
        let doc = parse(TAB_QUOTE, Dialect::TabModuleTable);
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "Precision 5570");
    }
}
