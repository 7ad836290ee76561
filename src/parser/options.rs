//! Parsing options and configuration.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Base-unit model families recognized out of the box.
pub const DEFAULT_KEYWORDS: [&str; 5] = ["Precision", "Latitude", "OptiPlex", "XPS", "Workstation"];

/// Header, footer and legal phrases that never carry configuration data.
pub const DEFAULT_BOILERPLATE: [&str; 16] = [
    "Subtotal",
    "Sub-total",
    "Total",
    "Grand Total",
    "Quote Total",
    "Total Price",
    "Unit Price",
    "Estimated Tax",
    "Tax",
    "Shipping",
    "Shipping & Handling",
    "Terms of Sale",
    "Quote Number",
    "Quote Date",
    "Sales Rep",
    "Salesperson",
];

static DEFAULT_KEYWORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    keyword_regex(&DEFAULT_KEYWORDS.map(String::from)).unwrap()
});

fn keyword_regex(keywords: &[String]) -> std::result::Result<Regex, regex::Error> {
    let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    RegexBuilder::new(&format!(r"\b(?:{})", alternatives.join("|")))
        .case_insensitive(true)
        .build()
}

/// Case-insensitive set of base-unit keywords (model family names).
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    matcher: Regex,
}

impl KeywordSet {
    /// Build a keyword set. Blank entries are ignored; an empty set is
    /// rejected because it could never start a section.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(Into::into)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(Error::InvalidOption("keyword set is empty".into()));
        }

        let matcher =
            keyword_regex(&keywords).map_err(|e| Error::InvalidOption(e.to_string()))?;
        Ok(Self { keywords, matcher })
    }

    /// Keywords in the order they were given.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when any keyword occurs in the text.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.map(String::from).to_vec(),
            matcher: DEFAULT_KEYWORD_REGEX.clone(),
        }
    }
}

/// Which noise lines the line normalizer drops.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    /// Drop lines that are only a currency amount.
    pub strip_prices: bool,

    /// Drop header/footer/legal lines (`Subtotal`, `Terms of Sale`, page
    /// numbers, ...).
    pub strip_boilerplate: bool,

    /// Drop lines that are only a SKU (pricing rows of some exports).
    pub strip_sku_lines: bool,

    /// Additional phrases treated as boilerplate, e.g. salesperson names.
    pub extra_phrases: Vec<String>,
}

impl NoiseFilter {
    /// A filter that keeps every non-empty line.
    pub fn none() -> Self {
        Self {
            strip_prices: false,
            strip_boilerplate: false,
            strip_sku_lines: false,
            extra_phrases: Vec::new(),
        }
    }

    /// Add a boilerplate phrase.
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.extra_phrases.push(phrase.into());
        self
    }

    /// Enable or disable SKU-only line removal.
    pub fn with_sku_lines_stripped(mut self, strip: bool) -> Self {
        self.strip_sku_lines = strip;
        self
    }

    /// True when no rule is active.
    pub fn is_disabled(&self) -> bool {
        !self.strip_prices && !self.strip_boilerplate && !self.strip_sku_lines
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            strip_prices: true,
            strip_boilerplate: true,
            strip_sku_lines: false,
            extra_phrases: Vec::new(),
        }
    }
}

/// Options for parsing quote text.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Keywords that mark a base-unit (section title) line
    pub keywords: KeywordSet,

    /// Noise removal applied before segmentation
    pub noise: NoiseFilter,

    /// Also emit the base line itself as the first item of its section
    pub include_base_item: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base-unit keyword set.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the noise filter.
    pub fn with_noise_filter(mut self, noise: NoiseFilter) -> Self {
        self.noise = noise;
        self
    }

    /// Keep every non-empty line.
    pub fn without_noise_filter(mut self) -> Self {
        self.noise = NoiseFilter::none();
        self
    }

    /// Include or omit the base line as an item.
    pub fn with_base_item(mut self, include: bool) -> Self {
        self.include_base_item = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords_match_case_insensitively() {
        let set = KeywordSet::default();
        assert!(set.matches("Dell PRECISION 5570"));
        assert!(set.matches("optiplex 7010 Micro"));
        assert!(set.matches("Latitude 7440"));
        assert!(set.matches("XPS 13"));
        assert!(set.matches("Mobile Workstation"));
        assert!(!set.matches("16GB DDR5 Memory"));
    }

    #[test]
    fn test_custom_keywords() {
        let set = KeywordSet::new(["Vostro", "  ", "PowerEdge"]).unwrap();
        assert_eq!(set.keywords(), &["Vostro".to_string(), "PowerEdge".to_string()]);
        assert!(set.matches("PowerEdge R760"));
        assert!(!set.matches("Precision 3680"));
    }

    #[test]
    fn test_keywords_are_escaped() {
        let set = KeywordSet::new(["C++ Box"]).unwrap();
        assert!(set.matches("the c++ box"));
    }

    #[test]
    fn test_empty_keyword_set_rejected() {
        let err = KeywordSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidOption(_)));
    }

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .with_base_item(true)
            .without_noise_filter();
        assert!(options.include_base_item);
        assert!(options.noise.is_disabled());
    }

    #[test]
    fn test_noise_filter_phrases() {
        let noise = NoiseFilter::default().with_phrase("Jane Doe");
        assert_eq!(noise.extra_phrases, vec!["Jane Doe".to_string()]);
        assert!(!noise.is_disabled());
    }
}
