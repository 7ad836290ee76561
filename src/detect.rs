//! Input dialect tags and dialect sniffing.

use crate::error::{Error, Result};
use crate::parser::columns::{split_tabs, split_whitespace_runs};
use crate::parser::header_row_positions;
use crate::parser::sku::find_sku;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The raw input layouts the formatter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Tab-delimited rows: category, description, code, SKU, quantity.
    /// Sections start at rows whose first column is "Base".
    TabModuleTable,
    /// Columns separated by runs of two or more spaces (PDF text layer).
    SpaceDelimitedTable,
    /// Tables introduced by a "Description / SKU / Quantity" header row
    /// (HTML or e-mail quote view).
    HeaderAnchoredTable,
    /// Pasted lists where a description line is followed by a SKU and a
    /// quantity, or the SKU and quantity trail the description.
    FreeformSkuQuantity,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Dialect; 4] = [
        Dialect::TabModuleTable,
        Dialect::SpaceDelimitedTable,
        Dialect::HeaderAnchoredTable,
        Dialect::FreeformSkuQuantity,
    ];

    /// Canonical kebab-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::TabModuleTable => "tab-module-table",
            Dialect::SpaceDelimitedTable => "space-delimited-table",
            Dialect::HeaderAnchoredTable => "header-anchored-table",
            Dialect::FreeformSkuQuantity => "freeform-sku-quantity",
        }
    }

    /// Short human description, used by the CLI.
    pub fn description(&self) -> &'static str {
        match self {
            Dialect::TabModuleTable => "tab-delimited module table with Base rows",
            Dialect::SpaceDelimitedTable => "multi-space delimited table",
            Dialect::HeaderAnchoredTable => "table under a Description/SKU/Quantity header",
            Dialect::FreeformSkuQuantity => "pasted description, SKU and quantity lines",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "tabmoduletable" | "tabmodule" | "tab" => Ok(Dialect::TabModuleTable),
            "spacedelimitedtable" | "spacedelimited" | "space" => Ok(Dialect::SpaceDelimitedTable),
            "headeranchoredtable" | "headeranchored" | "header" | "html" => {
                Ok(Dialect::HeaderAnchoredTable)
            }
            "freeformskuquantity" | "freeform" | "pasted" => Ok(Dialect::FreeformSkuQuantity),
            _ => Err(Error::UnsupportedDialect(s.trim().to_string())),
        }
    }
}

/// Guess the dialect of a raw quote.
///
/// Checks run from the most specific layout to the least specific:
/// a Description/SKU/Quantity header row, tab tables with at least five
/// columns, multi-space rows ending in a quantity, and finally any SKU
/// token at all. Returns `None` when nothing looks like a quote.
pub fn sniff_dialect(text: &str) -> Option<Dialect> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.iter().any(|l| header_row_positions(l).is_some()) {
        return Some(Dialect::HeaderAnchoredTable);
    }

    if lines.iter().any(|l| split_tabs(l).len() >= 5) {
        return Some(Dialect::TabModuleTable);
    }

    let column_rows = lines
        .iter()
        .filter(|l| {
            let cols = split_whitespace_runs(l);
            cols.len() >= 3 && cols.last().is_some_and(|q| q.parse::<u32>().is_ok())
        })
        .count();
    if column_rows >= 2 {
        return Some(Dialect::SpaceDelimitedTable);
    }

    if lines.iter().any(|l| find_sku(l).is_some()) {
        return Some(Dialect::FreeformSkuQuantity);
    }

    None
}
