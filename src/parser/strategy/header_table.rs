//! Tables introduced by a `Description / SKU / Quantity` header row, as
//! found in HTML and e-mail views of a quote.
//!
//! Every header row opens a section that runs to the next header. Inside a
//! section only rows whose SKU column holds a real SKU are components.

use super::DialectStrategy;
use crate::detect::Dialect;
use crate::model::{LineItem, ProductSection, Sentinel};
use crate::parser::columns::{split_tabs, split_whitespace_runs, ColumnSchema};
use crate::parser::options::ParseOptions;
use crate::parser::segment::{segment, Segment, TriggerPolicy};

const HEADER_TOKENS: [&str; 3] = ["description", "sku", "quantity"];

/// Column positions read from a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColumns {
    pub description: usize,
    pub sku: usize,
    pub quantity: usize,
}

impl HeaderColumns {
    /// Column schema for the rows under this header.
    pub fn schema(&self) -> ColumnSchema {
        ColumnSchema::header_anchored(self.description, self.sku, self.quantity)
    }
}

/// Locate the Description, SKU and Quantity columns of a header row.
///
/// Returns `None` unless the line contains all three tokens
/// (case-insensitive). Positions come from the cell split when each token
/// sits in its own cell; otherwise from the order in which the tokens appear
/// in the line. A header containing a tab is split on single tabs.
pub fn header_row_positions(line: &str) -> Option<HeaderColumns> {
    let lower = line.to_lowercase();
    let offsets: Vec<usize> = HEADER_TOKENS
        .iter()
        .map(|token| lower.find(token))
        .collect::<Option<_>>()?;

    let cells = split_cells(&lower, is_tabbed(&lower));
    let by_cell: Option<Vec<usize>> = HEADER_TOKENS
        .iter()
        .map(|token| cells.iter().position(|c| c.contains(token)))
        .collect();

    if let Some(idx) = by_cell {
        if idx[0] != idx[1] && idx[1] != idx[2] && idx[0] != idx[2] {
            return Some(HeaderColumns {
                description: idx[0],
                sku: idx[1],
                quantity: idx[2],
            });
        }
    }

    let rank = |offset: usize| offsets.iter().filter(|o| **o < offset).count();
    Some(HeaderColumns {
        description: rank(offsets[0]),
        sku: rank(offsets[1]),
        quantity: rank(offsets[2]),
    })
}

/// Strategy for [`Dialect::HeaderAnchoredTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderTableStrategy;

impl DialectStrategy for HeaderTableStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::HeaderAnchoredTable
    }

    fn extract(&self, lines: &[String], options: &ParseOptions) -> Vec<ProductSection> {
        segment(lines, &TriggerPolicy::HeaderRow)
            .iter()
            .filter_map(|seg| build_section(seg, options))
            .collect()
    }

    fn missing_sections(&self) -> Sentinel {
        Sentinel::NoDetailSections
    }
}

fn is_tabbed(line: &str) -> bool {
    line.contains('\t')
}

// Tab-delimited rows keep their empty cells so positions line up with the
// header.
fn split_cells(line: &str, tabbed: bool) -> Vec<&str> {
    if tabbed {
        split_tabs(line)
    } else {
        split_whitespace_runs(line)
    }
}

fn build_section(seg: &Segment<'_>, options: &ParseOptions) -> Option<ProductSection> {
    let schema = header_row_positions(seg.trigger)?.schema();
    let tabbed = is_tabbed(seg.trigger);

    let items: Vec<LineItem> = seg
        .body
        .iter()
        .filter_map(|line| {
            let cells = split_cells(line, tabbed);
            let row = schema.resolve(&cells)?;
            let item = LineItem::new(row.description, row.quantity.unwrap_or(1));
            Some(match row.sku {
                Some(sku) => item.with_sku(sku),
                None => item,
            })
        })
        .collect();

    // The line above the header names the product, unless it is itself a
    // component row of the previous table.
    let title = seg
        .preceding
        .filter(|line| header_row_positions(line).is_none())
        .filter(|line| schema.resolve(&split_cells(line, tabbed)).is_none())
        .or_else(|| {
            items
                .iter()
                .map(LineItem::description)
                .find(|d| options.keywords.matches(d))
        })
        .unwrap_or("");

    let base_quantity = items.first().map(LineItem::quantity).unwrap_or(1);
    let mut section = ProductSection::new(title, base_quantity);
    for item in items {
        section.push(item);
    }
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_header_positions_from_cells() {
        let cols = header_row_positions("Description  SKU  Unit Price  Quantity").unwrap();
        assert_eq!(
            cols,
            HeaderColumns {
                description: 0,
                sku: 1,
                quantity: 3
            }
        );
    }

    #[test]
    fn test_header_positions_from_token_order() {
        let cols = header_row_positions("Quantity Description SKU").unwrap();
        assert_eq!(
            cols,
            HeaderColumns {
                description: 1,
                sku: 2,
                quantity: 0
            }
        );
    }

    #[test]
    fn test_header_positions_from_tabs() {
        let cols = header_row_positions("Description\tSKU\tUnit Price\tQuantity").unwrap();
        assert_eq!(cols.quantity, 3);
    }

    #[test]
    fn test_tabbed_rows_keep_empty_cells() {
        let input = lines(
            "USB-C Dock\n\
             Description\tSKU\tUnit Price\tQuantity\n\
             Dock\t452-BDUV\t\t2\n\
             Cable\t470-ABCD\t$9.99\t4",
        );
        let sections = HeaderTableStrategy.extract(&input, &ParseOptions::default());

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "USB-C Dock");
        assert_eq!(sections[0].items[0].sku(), Some("452-BDUV"));
        assert_eq!(sections[0].items[0].quantity(), 2);
        assert_eq!(sections[0].items[1].quantity(), 4);
        assert_eq!(sections[0].base_quantity, 2);
    }

    #[test]
    fn test_not_a_header() {
        assert!(header_row_positions("Description  SKU").is_none());
        assert!(header_row_positions("").is_none());
    }

    #[test]
    fn test_extracts_components() {
        let input = lines(
            "Precision 3680 Tower\n\
             Description  SKU  Quantity\n\
             Precision 3680 Tower Base  210-BLLB  2\n\
             Intel Core i7-14700  338-CNXR  2\n\
             Ships in 5 days\n\
             Keyboard  580-AKLM\n\
             Latitude 5550\n\
             Description  SKU  Quantity\n\
             Latitude 5550 Base  210-BMXQ  10",
        );
        let sections = HeaderTableStrategy.extract(&input, &ParseOptions::default());

        assert_eq!(sections.len(), 2);
        let first = &sections[0];
        assert_eq!(first.title, "Precision 3680 Tower");
        assert_eq!(first.base_quantity, 2);
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.items[1].sku(), Some("338-CNXR"));
        // missing quantity column defaults to 1
        assert_eq!(first.items[2].quantity(), 1);

        assert_eq!(sections[1].title, "Latitude 5550");
        assert_eq!(sections[1].base_quantity, 10);
    }

    #[test]
    fn test_title_falls_back_to_keyword_item() {
        let input = lines(
            "Description  SKU  Quantity\n\
             OptiPlex 7020 Micro  210-BKZP  3\n\
             8GB DDR5  370-AHCL  3",
        );
        let sections = HeaderTableStrategy.extract(&input, &ParseOptions::default());
        assert_eq!(sections[0].title, "OptiPlex 7020 Micro");
    }

    #[test]
    fn test_non_numeric_quantity_defaults_to_one() {
        let input = lines("Description  SKU  Quantity\nDock  452-BDUV  TBD");
        let sections = HeaderTableStrategy.extract(&input, &ParseOptions::default());
        assert_eq!(sections[0].title, "");
        assert_eq!(sections[0].items[0].quantity(), 1);
    }
}
