//! Vendor SKU matching shared by every dialect.
//!
//! A SKU is an uppercase alphanumeric prefix of at least three characters,
//! a hyphen, then an uppercase alphanumeric suffix of at least four
//! characters: `210-BLLB`, `5319-ABCD`, `338-CNXR`.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_SKU_EXACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{3,}-[A-Z0-9]{4,}$").unwrap());

static RE_SKU_ANYWHERE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z0-9]{3,}-[A-Z0-9]{4,}\b").unwrap());

// Description, SKU, then "-<qty>" at the very end of the line.
static RE_SKU_TRAILING_QTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<desc>.*?)\s*\b(?P<sku>[A-Z0-9]{3,}-[A-Z0-9]{4,})\s*-\s*(?P<qty>\d+)$").unwrap()
});

/// True when the whole (trimmed) text is a single SKU.
pub fn is_sku(text: &str) -> bool {
    RE_SKU_EXACT.is_match(text.trim())
}

/// First SKU token found anywhere in the text.
pub fn find_sku(text: &str) -> Option<&str> {
    RE_SKU_ANYWHERE.find(text).map(|m| m.as_str())
}

/// A line that ends with `<SKU>-<quantity>`, e.g. `16GB Memory 370-AHCL-2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingSku<'a> {
    /// Text before the SKU, separators trimmed. May be empty.
    pub description: &'a str,
    pub sku: &'a str,
    pub quantity: u32,
}

/// Match a line ending in a SKU followed by a hyphen and an integer.
///
/// Lines whose trailing integer is zero do not match: quantities are
/// always positive.
pub fn match_trailing_sku(line: &str) -> Option<TrailingSku<'_>> {
    let caps = RE_SKU_TRAILING_QTY.captures(line.trim())?;
    let quantity = parse_quantity(caps.name("qty")?.as_str())?;
    let description = caps
        .name("desc")
        .map(|m| m.as_str().trim_end_matches([' ', '-', ':', '|', '\t']).trim())
        .unwrap_or("");

    Some(TrailingSku {
        description,
        sku: caps.name("sku")?.as_str(),
        quantity,
    })
}

/// Parse a positive integer quantity.
///
/// Accepts surrounding whitespace and thousands separators (`1,000`);
/// zero and anything non-numeric yield `None`.
pub fn parse_quantity(text: &str) -> Option<u32> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<u32>().ok().filter(|q| *q > 0)
}
