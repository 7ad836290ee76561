//! Pasted, non-columnar quotes.
//!
//! Two item shapes are recognized:
//!
//! - a line ending in `<SKU>-<quantity>`: `16GB Memory 370-AHCL-2`
//! - a standalone SKU line, whose description is the line directly above it
//!   and whose quantity is the first bare integer within the next three
//!   lines
//!
//! Products are separated by lines naming a base-unit keyword.

use super::DialectStrategy;
use crate::detect::Dialect;
use crate::model::{LineItem, ProductSection};
use crate::parser::options::ParseOptions;
use crate::parser::segment::{segment, Segment, TriggerPolicy};
use crate::parser::sku::{is_sku, match_trailing_sku, parse_quantity};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// How far below a SKU line the quantity may appear.
const QUANTITY_LOOKAHEAD: usize = 3;

/// Lines up to this many characters are filler, not unrelated text.
const FILLER_MAX_CHARS: usize = 3;

static RE_QUANTITY_TOKEN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(?:qty|quantity|x)?\s*:?\s*(\d[\d,]*)\s*(?:x|ea\.?|each|pcs|units?)?$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

static RE_FILLER: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(?:[-–—x×:|/]+|qty:?|quantity:?|ea\.?|each|pcs)$")
        .case_insensitive(true)
        .build()
        .unwrap()
});

/// Strategy for [`Dialect::FreeformSkuQuantity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeformStrategy;

impl DialectStrategy for FreeformStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::FreeformSkuQuantity
    }

    fn extract(&self, lines: &[String], options: &ParseOptions) -> Vec<ProductSection> {
        segment(lines, &TriggerPolicy::Keyword(&options.keywords))
            .iter()
            .map(|seg| build_section(seg, options))
            .collect()
    }

    fn needs_sku_lines(&self) -> bool {
        true
    }
}

fn build_section(seg: &Segment<'_>, options: &ParseOptions) -> ProductSection {
    let mut window: Vec<&str> = Vec::with_capacity(seg.body.len() + 1);
    window.push(seg.trigger);
    window.extend(seg.body.iter().copied());

    let mut found = scan_items(&window);

    let title = match match_trailing_sku(seg.trigger) {
        Some(m) if !m.description.is_empty() => m.description,
        _ => seg.trigger,
    };

    // An item described by the trigger line is the base line itself.
    let base_quantity = match found.first().map(|(line, item)| (*line, item.quantity())) {
        Some((0, quantity)) => {
            if !options.include_base_item {
                found.remove(0);
            }
            quantity
        }
        Some((_, quantity)) => quantity,
        None => 1,
    };

    let mut section = ProductSection::new(title, base_quantity);
    for (_, item) in found {
        section.push(item);
    }
    section
}

/// Extract items from freeform lines, ignoring product boundaries.
pub fn extract_freeform_items<S: AsRef<str>>(lines: &[S]) -> Vec<LineItem> {
    let window: Vec<&str> = lines.iter().map(|l| l.as_ref().trim()).collect();
    scan_items(&window)
        .into_iter()
        .map(|(_, item)| item)
        .collect()
}

// Items paired with the index of the line that described them.
fn scan_items(window: &[&str]) -> Vec<(usize, LineItem)> {
    let mut consumed = vec![false; window.len()];
    let mut items = Vec::new();
    let mut i = 0;

    while i < window.len() {
        let line = window[i];

        if let Some(m) = match_trailing_sku(line) {
            consumed[i] = true;
            if !m.description.is_empty() {
                items.push((i, LineItem::new(m.description, m.quantity).with_sku(m.sku)));
            } else if let Some(d) = description_before(window, &consumed, i) {
                consumed[d] = true;
                items.push((d, LineItem::new(window[d], m.quantity).with_sku(m.sku)));
            }
            i += 1;
            continue;
        }

        if is_sku(line) {
            if let Some(d) = description_before(window, &consumed, i) {
                consumed[d] = true;
                consumed[i] = true;
                let (quantity, used) = quantity_after(window, i);
                let mut next = i + 1;
                if let Some(q) = used {
                    consumed[q] = true;
                    next = q + 1;
                }
                items.push((d, LineItem::new(window[d], quantity).with_sku(line)));
                i = next;
                continue;
            }
        }

        i += 1;
    }

    items
}

fn description_before(window: &[&str], consumed: &[bool], i: usize) -> Option<usize> {
    let d = i.checked_sub(1)?;
    let line = window[d];
    // Short descriptions like "SSD" are valid, so only explicit filler is rejected.
    let usable = !consumed[d]
        && !is_sku(line)
        && !RE_FILLER.is_match(line)
        && quantity_token(line).is_none()
        && match_trailing_sku(line).is_none();
    usable.then_some(d)
}

// First standalone integer within the lookahead; filler lines are skipped,
// any other text ends the search.
fn quantity_after(window: &[&str], i: usize) -> (u32, Option<usize>) {
    let end = (i + QUANTITY_LOOKAHEAD).min(window.len().saturating_sub(1));
    for k in (i + 1)..=end {
        let line = window[k];
        if let Some(quantity) = quantity_token(line) {
            return (quantity, Some(k));
        }
        if !is_filler(line) {
            break;
        }
    }
    (1, None)
}

fn quantity_token(line: &str) -> Option<u32> {
    let caps = RE_QUANTITY_TOKEN.captures(line)?;
    parse_quantity(caps.get(1)?.as_str())
}

fn is_filler(line: &str) -> bool {
    RE_FILLER.is_match(line)
        || (line.chars().count() <= FILLER_MAX_CHARS
            && !line.chars().any(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_standalone_sku_with_quantity_below() {
        let items = extract_freeform_items(&["16GB Memory", "210-ABCD", "-", "2"]);
        assert_eq!(
            items,
            vec![LineItem::new("16GB Memory", 2).with_sku("210-ABCD")]
        );
    }

    #[test]
    fn test_trailing_sku_and_quantity() {
        let items = extract_freeform_items(&["512GB SSD 400-AXYZ-3"]);
        assert_eq!(items[0].description(), "512GB SSD");
        assert_eq!(items[0].sku(), Some("400-AXYZ"));
        assert_eq!(items[0].quantity(), 3);
    }

    #[test]
    fn test_quantity_search_abandoned_by_text() {
        let items = extract_freeform_items(&["Wireless Card", "555-BKRT", "Ships separately", "4"]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity(), 1);
    }

    #[test]
    fn test_quantity_search_limited_to_three_lines() {
        let items = extract_freeform_items(&["Dock", "452-BDUV", "-", "-", "-", "6"]);
        assert_eq!(items[0].quantity(), 1);
    }

    #[test]
    fn test_quantity_line_not_reused_as_description() {
        let items = extract_freeform_items(&["16GB Memory", "370-AHCL", "2", "400-AXYZ", "1"]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku(), Some("370-AHCL"));
    }

    #[test]
    fn test_short_description_kept() {
        let items = extract_freeform_items(&["SSD", "400-AXYZ", "2"]);
        assert_eq!(items, vec![LineItem::new("SSD", 2).with_sku("400-AXYZ")]);
    }

    #[test]
    fn test_filler_line_not_used_as_description() {
        assert!(extract_freeform_items(&["-", "400-AXYZ", "2"]).is_empty());
    }

    #[test]
    fn test_quantity_with_prefix_or_unit() {
        assert_eq!(quantity_token("x 2"), Some(2));
        assert_eq!(quantity_token("Qty: 3"), Some(3));
        assert_eq!(quantity_token("2 ea"), Some(2));
        assert_eq!(quantity_token("4 pcs"), Some(4));
        assert_eq!(quantity_token("2 GB"), None);

        let items = extract_freeform_items(&["USB-C Dock", "452-BDUV", "2 ea"]);
        assert_eq!(items[0].quantity(), 2);
    }

    #[test]
    fn test_sku_without_description_dropped() {
        assert!(extract_freeform_items(&["370-AHCL", "2"]).is_empty());
    }

    #[test]
    fn test_sequence_of_items() {
        let items = extract_freeform_items(&[
            "16GB Memory",
            "370-AHCL",
            "Qty: 2",
            "512GB SSD",
            "400-AXYZ",
            "-",
            "2",
            "Keyboard 580-AKLM-1",
        ]);
        let skus: Vec<_> = items.iter().filter_map(LineItem::sku).collect();
        assert_eq!(skus, vec!["370-AHCL", "400-AXYZ", "580-AKLM"]);
        assert_eq!(items[2].quantity(), 1);
    }

    #[test]
    fn test_sections_with_base_line() {
        let input = lines(
            "Precision 3680 Tower\n\
             210-BLLB\n\
             -\n\
             3\n\
             32GB Memory\n\
             370-AHCL\n\
             3\n\
             Wireless Mouse 570-ABOC-6",
        );
        let sections = FreeformStrategy.extract(&input, &ParseOptions::default());

        assert_eq!(sections.len(), 1);
        let section = &sections[0];
        assert_eq!(section.title, "Precision 3680 Tower");
        assert_eq!(section.base_quantity, 3);
        assert_eq!(section.items.len(), 2);
        assert_eq!(section.items[1].quantity(), 6);
    }

    #[test]
    fn test_sections_keep_base_item_when_asked() {
        let input = lines("XPS 13 9340 210-BKHW-2\n16GB Memory\n370-AHCL\n2");
        let options = ParseOptions::new().with_base_item(true);
        let sections = FreeformStrategy.extract(&input, &options);

        assert_eq!(sections[0].title, "XPS 13 9340");
        assert_eq!(sections[0].base_quantity, 2);
        assert_eq!(sections[0].items.len(), 2);
    }

    #[test]
    fn test_sections_without_base_line() {
        let input = lines("Latitude 7440 configuration\n16GB Memory\n370-AHCL\n5");
        let sections = FreeformStrategy.extract(&input, &ParseOptions::default());
        assert_eq!(sections[0].base_quantity, 5);
        assert_eq!(sections[0].items.len(), 1);
    }
}
