//! Tab-delimited module tables.
//!
//! Rows are `category \t description \t code \t sku \t quantity`. A row whose
//! category is `Base` starts a product; its description is the title and
//! its quantity the base quantity. `Module` rows are column headers.

use super::{base_item, DialectStrategy};
use crate::detect::Dialect;
use crate::model::{LineItem, ProductSection};
use crate::parser::columns::{split_tabs, ColumnSchema};
use crate::parser::options::ParseOptions;
use crate::parser::segment::{segment, Segment, TriggerPolicy};

/// Strategy for [`Dialect::TabModuleTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TabModuleStrategy;

impl DialectStrategy for TabModuleStrategy {
    fn dialect(&self) -> Dialect {
        Dialect::TabModuleTable
    }

    fn extract(&self, lines: &[String], options: &ParseOptions) -> Vec<ProductSection> {
        let schema = ColumnSchema::tab_module();
        segment(lines, &TriggerPolicy::ColumnMarker)
            .iter()
            .map(|seg| build_section(&schema, seg, options))
            .collect()
    }
}

fn build_section(schema: &ColumnSchema, seg: &Segment<'_>, options: &ParseOptions) -> ProductSection {
    let base_cells = split_tabs(seg.trigger);
    let (title, base_quantity, base_sku) = match schema.resolve(&base_cells) {
        Some(row) => (row.description, row.quantity.unwrap_or(1), row.sku),
        // short base row: take whatever follows the marker as the title
        None => (base_cells.get(1).copied().unwrap_or(""), 1, None),
    };

    let mut section = ProductSection::new(title, base_quantity);
    if options.include_base_item && !title.is_empty() {
        section.push(base_item(title, base_quantity, base_sku));
    }

    let mut dropped = 0usize;
    for line in &seg.body {
        let cells = split_tabs(line);
        let Some(row) = schema.resolve(&cells) else {
            dropped += 1;
            continue;
        };
        let Some(quantity) = row.quantity else {
            dropped += 1;
            continue;
        };

        let mut item = LineItem::new(row.description, quantity);
        if let Some(category) = row
            .category
            .filter(|c| !c.eq_ignore_ascii_case("module") && !c.eq_ignore_ascii_case("base"))
        {
            item = item.with_category(category);
        }
        if let Some(sku) = row.sku {
            item = item.with_sku(sku);
        }
        section.push(item);
    }

    if dropped > 0 {
        log::debug!("Tab table '{}': dropped {} malformed rows", title, dropped);
    }
    section
}
