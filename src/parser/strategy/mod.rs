//! Dialect strategies.
//!
//! Each input layout is handled by one [`DialectStrategy`]. All strategies
//! share the same contract: normalized lines in, product sections out.
//! [`strategy_for`] maps the closed set of [`Dialect`] tags to their
//! strategy.

mod freeform;
pub mod header_table;
mod space_table;
mod tab_module;

pub use freeform::{extract_freeform_items, FreeformStrategy};
pub use header_table::HeaderTableStrategy;
pub use space_table::SpaceTableStrategy;
pub use tab_module::TabModuleStrategy;

use super::options::ParseOptions;
use crate::detect::Dialect;
use crate::model::{LineItem, ProductSection, Sentinel};

/// Extraction strategy for one input dialect.
pub trait DialectStrategy: Send + Sync {
    /// The dialect this strategy handles.
    fn dialect(&self) -> Dialect;

    /// Split normalized lines into product sections.
    ///
    /// Returns one section per trigger, in source order. Lines that match
    /// no pattern are dropped.
    fn extract(&self, lines: &[String], options: &ParseOptions) -> Vec<ProductSection>;

    /// Sentinel reported when `extract` finds no section.
    fn missing_sections(&self) -> Sentinel {
        Sentinel::NoProductsDetected
    }

    /// Whether SKU-only lines carry items in this dialect, so the noise
    /// filter must keep them.
    fn needs_sku_lines(&self) -> bool {
        false
    }
}

static TAB_MODULE: TabModuleStrategy = TabModuleStrategy;
static SPACE_TABLE: SpaceTableStrategy = SpaceTableStrategy;
static HEADER_TABLE: HeaderTableStrategy = HeaderTableStrategy;
static FREEFORM: FreeformStrategy = FreeformStrategy;

/// Strategy for a dialect.
pub fn strategy_for(dialect: Dialect) -> &'static dyn DialectStrategy {
    match dialect {
        Dialect::TabModuleTable => &TAB_MODULE,
        Dialect::SpaceDelimitedTable => &SPACE_TABLE,
        Dialect::HeaderAnchoredTable => &HEADER_TABLE,
        Dialect::FreeformSkuQuantity => &FREEFORM,
    }
}

/// Build the base line as an item when the options ask for it.
fn base_item(title: &str, quantity: u32, sku: Option<&str>) -> LineItem {
    let item = LineItem::new(title, quantity);
    match sku {
        Some(sku) => item.with_sku(sku),
        None => item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_for_every_dialect() {
        for dialect in Dialect::ALL {
            assert_eq!(strategy_for(dialect).dialect(), dialect);
        }
    }

    #[test]
    fn test_missing_section_sentinels() {
        assert_eq!(
            strategy_for(Dialect::HeaderAnchoredTable).missing_sections(),
            Sentinel::NoDetailSections
        );
        assert_eq!(
            strategy_for(Dialect::TabModuleTable).missing_sections(),
            Sentinel::NoProductsDetected
        );
    }

    #[test]
    fn test_only_freeform_needs_sku_lines() {
        for dialect in Dialect::ALL {
            assert_eq!(
                strategy_for(dialect).needs_sku_lines(),
                dialect == Dialect::FreeformSkuQuantity
            );
        }
    }
}
