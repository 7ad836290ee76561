//! Tables whose columns are separated by runs of whitespace, as produced by
//! PDF text layers.

use super::{base_item, DialectStrategy};
use crate::detect::Dialect;
use crate::model::{LineItem, ProductSection};
use crate::parser::columns::{split_whitespace_runs, ColumnSchema};
use crate::parser::options::ParseOptions;
use crate::parser::segment::{segment, Segment, TriggerPolicy};
use crate::parser::sku::{find_sku, parse_quantity};

/// Column holding the model name on title rows.
const TITLE_COLUMN: usize = 1;

/// Strategy for [`Dialect::SpaceDelimitedTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTableStrategy;

impl DialectStrategy for SpaceTableStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::SpaceDelimitedTable
    }

    fn extract(&self, lines: &[String], options: &ParseOptions) -> Vec<ProductSection> {
        let schema = ColumnSchema::space_table();
        let policy = TriggerPolicy::KeywordInColumn {
            keywords: &options.keywords,
            column: TITLE_COLUMN,
        };
        segment(lines, &policy)
            .iter()
            .map(|seg| build_section(&schema, seg, options))
            .collect()
    }
}

fn build_section(schema: &ColumnSchema, seg: &Segment<'_>, options: &ParseOptions) -> ProductSection {
    let title_cells = split_whitespace_runs(seg.trigger);
    let title = title_cells.get(TITLE_COLUMN).copied().unwrap_or("");
    let base_quantity = if title_cells.len() > TITLE_COLUMN + 1 {
        title_cells.last().and_then(|q| parse_quantity(q)).unwrap_or(1)
    } else {
        1
    };

    let mut section = ProductSection::new(title, base_quantity);
    if options.include_base_item {
        section.push(base_item(title, base_quantity, find_sku(seg.trigger)));
    }

    for line in &seg.body {
        let cells = split_whitespace_runs(line);
        let Some(row) = schema.resolve(&cells) else {
            continue;
        };
        // quantity is always the last column
        let Some(quantity) = row.quantity else {
            continue;
        };

        let mut item = LineItem::new(row.description, quantity);
        if let Some(category) = row.category {
            item = item.with_category(category);
        }
        if let Some(sku) = row.sku {
            item = item.with_sku(sku);
        }
        section.push(item);
    }

    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_extracts_sections() {
        let input = lines(
            "Dell Quote 3000123\n\
             Base  Precision 7680 Workstation  4\n\
             Processor  Intel Core i9-13950HX  4\n\
             Memory  32GB DDR5  370-AHCL  4\n\
             Docking  WD22TB4 Dock  2\n\
             Base  Latitude 7440  1\n\
             Memory  16GB LPDDR5  1",
        );
        let sections = SpaceTableStrategy.extract(&input, &ParseOptions::default());

        assert_eq!(sections.len(), 2);
        let first = &sections[0];
        assert_eq!(first.title, "Precision 7680 Workstation");
        assert_eq!(first.base_quantity, 4);
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.items[1].label(), "Memory: 32GB DDR5");
        assert_eq!(first.items[1].sku(), Some("370-AHCL"));
        assert_eq!(first.items[2].quantity(), 2);

        assert_eq!(sections[1].title, "Latitude 7440");
        assert_eq!(sections[1].base_quantity, 1);
    }

    #[test]
    fn test_rows_without_quantity_dropped() {
        let input = lines(
            "Base  OptiPlex 7010  2\n\
             Warranty  3 Years ProSupport\n\
             Memory  8GB DDR4  2",
        );
        let sections = SpaceTableStrategy.extract(&input, &ParseOptions::default());
        assert_eq!(sections[0].items.len(), 1);
        assert_eq!(sections[0].items[0].description(), "8GB DDR4");
    }

    #[test]
    fn test_title_without_quantity() {
        let input = lines("Base  XPS 13\nMemory  16GB  3");
        let sections = SpaceTableStrategy.extract(&input, &ParseOptions::default());
        assert_eq!(sections[0].title, "XPS 13");
        assert_eq!(sections[0].base_quantity, 1);
    }

    #[test]
    fn test_keyword_outside_title_column() {
        let input = lines("Precision  Support Plan  1\nMemory  16GB  1");
        assert!(SpaceTableStrategy
            .extract(&input, &ParseOptions::default())
            .is_empty());
    }
}
