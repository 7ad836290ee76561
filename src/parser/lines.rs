//! Line normalization: raw text blob to trimmed, non-empty, noise-free lines.

use super::options::NoiseFilter;
use super::sku::is_sku;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use unicode_normalization::UnicodeNormalization;

use super::options::DEFAULT_BOILERPLATE;

static RE_PRICE_ONLY: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(
        r"^(?:usd\s*)?-?\$\s*[\d,]*\d(?:\.\d{2})?(?:\s*usd)?$|^(?:usd\s*)?-?[\d,]*\d\.\d{2}(?:\s*usd)?$|^usd\s*[\d,]*\d$",
    )
    .case_insensitive(true)
    .build()
    .unwrap()
});

static RE_PAGE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^page\s+\d+(?:\s*(?:of|/)\s*\d+)?$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Compiled form of a [`NoiseFilter`].
struct NoiseMatcher<'a> {
    filter: &'a NoiseFilter,
    boilerplate: Option<Regex>,
}

impl<'a> NoiseMatcher<'a> {
    fn new(filter: &'a NoiseFilter) -> Self {
        let boilerplate = if filter.strip_boilerplate || !filter.extra_phrases.is_empty() {
            boilerplate_regex(filter)
        } else {
            None
        };
        Self {
            filter,
            boilerplate,
        }
    }

    fn is_noise(&self, line: &str) -> bool {
        if self.filter.strip_prices && RE_PRICE_ONLY.is_match(line) {
            return true;
        }
        if self.filter.strip_boilerplate && RE_PAGE_NUMBER.is_match(line) {
            return true;
        }
        if self.filter.strip_sku_lines && is_sku(line) {
            return true;
        }
        self.boilerplate
            .as_ref()
            .is_some_and(|re| re.is_match(line))
    }
}

// A phrase alone, followed by a colon and anything, or followed by an amount.
fn boilerplate_regex(filter: &NoiseFilter) -> Option<Regex> {
    let mut phrases: Vec<String> = Vec::new();
    if filter.strip_boilerplate {
        phrases.extend(DEFAULT_BOILERPLATE.iter().map(|p| regex::escape(p)));
    }
    phrases.extend(
        filter
            .extra_phrases
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(regex::escape),
    );
    if phrases.is_empty() {
        return None;
    }

    let pattern = format!(
        r"^(?:{})\s*(?::.*|-?\s*(?:usd\s*)?\$?\s*[\d,]*(?:\.\d+)?(?:\s*usd)?)$",
        phrases.join("|")
    );
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Ignoring boilerplate phrases: {}", e);
            None
        }
    }
}

/// Collapse a raw text blob into trimmed, non-empty lines.
///
/// Lines are split on `\n`, `\r\n` and `\r`, NFC-normalized and trimmed.
/// Lines matching the noise filter are dropped. Surviving lines keep their
/// relative order, and running the normalizer on its own output changes
/// nothing.
pub fn normalize_lines(text: &str, noise: &NoiseFilter) -> Vec<String> {
    let matcher = NoiseMatcher::new(noise);
    let mut kept = Vec::new();
    let mut dropped = 0usize;

    for raw in text.split(['\n', '\r']) {
        let line: String = raw.nfc().collect::<String>().trim().to_string();
        if line.is_empty() {
            continue;
        }
        if matcher.is_noise(&line) {
            dropped += 1;
            continue;
        }
        kept.push(line);
    }

    log::debug!(
        "Line normalizer: kept {} lines, dropped {} noise lines",
        kept.len(),
        dropped
    );
    kept
}
