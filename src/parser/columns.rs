//! Column splitting and per-dialect column schemas.

use super::sku::{is_sku, parse_quantity};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+|\s{2,}").unwrap());

/// Split a line on tabs, trimming each cell. Empty cells are kept so
/// positions stay stable.
pub fn split_tabs(line: &str) -> Vec<&str> {
    line.split('\t').map(str::trim).collect()
}

/// Split a line on tabs or runs of two or more whitespace characters.
/// Empty cells are dropped.
pub fn split_whitespace_runs(line: &str) -> Vec<&str> {
    RE_WHITESPACE_RUN
        .split(line)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Position of a column, counted from either end of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef {
    /// Zero-based index from the first column.
    Start(usize),
    /// Zero-based index from the last column (`End(0)` is the last cell).
    End(usize),
}

impl ColumnRef {
    fn get<'a>(&self, cells: &[&'a str], shift: usize) -> Option<&'a str> {
        let index = match *self {
            ColumnRef::Start(i) => i.checked_sub(shift)?,
            ColumnRef::End(i) => cells.len().checked_sub(i + 1)?,
        };
        cells.get(index).copied()
    }
}

/// Where a row keeps its SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkuColumn {
    /// The dialect has no SKU column.
    None,
    /// A fixed column; any non-empty value is taken as the SKU.
    At(ColumnRef),
    /// A fixed column whose value must match the SKU pattern for the row
    /// to count as a component.
    Required(ColumnRef),
    /// The first cell between the description and the quantity that
    /// matches the SKU pattern, if any.
    Scan,
}

/// Column layout of one dialect.
///
/// `width` is the full number of columns. When the schema has a leading
/// category column, a row exactly one column short is read as missing
/// that category: `Start` positions shift left by one, `End` positions are
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub category: Option<ColumnRef>,
    pub description: ColumnRef,
    pub sku: SkuColumn,
    pub quantity: ColumnRef,
    pub width: usize,
    pub min_columns: usize,
}

/// A row resolved against a [`ColumnSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow<'a> {
    pub category: Option<&'a str>,
    pub description: &'a str,
    pub sku: Option<&'a str>,
    /// Parsed quantity; `None` when the cell is absent, zero or not numeric.
    pub quantity: Option<u32>,
}

impl ColumnSchema {
    /// `[category, description, code, sku, quantity]`, tab separated.
    pub fn tab_module() -> Self {
        Self {
            category: Some(ColumnRef::Start(0)),
            description: ColumnRef::End(3),
            sku: SkuColumn::At(ColumnRef::End(1)),
            quantity: ColumnRef::End(0),
            width: 5,
            min_columns: 4,
        }
    }

    /// `[category, description, ..., quantity]` split on whitespace runs.
    pub fn space_table() -> Self {
        Self {
            category: Some(ColumnRef::Start(0)),
            description: ColumnRef::Start(1),
            sku: SkuColumn::Scan,
            quantity: ColumnRef::End(0),
            width: 3,
            min_columns: 2,
        }
    }

    /// Columns located from a header row.
    pub fn header_anchored(description: usize, sku: usize, quantity: usize) -> Self {
        Self {
            category: None,
            description: ColumnRef::Start(description),
            sku: SkuColumn::Required(ColumnRef::Start(sku)),
            quantity: ColumnRef::Start(quantity),
            width: description.max(sku).max(quantity) + 1,
            min_columns: description.max(sku) + 1,
        }
    }

    /// Resolve a split row. Returns `None` when the row is too narrow, the
    /// description is empty, or a required SKU is missing.
    pub fn resolve<'a>(&self, cells: &[&'a str]) -> Option<ColumnRow<'a>> {
        if cells.len() < self.min_columns {
            return None;
        }

        let narrow = self.category.is_some() && cells.len() + 1 == self.width;
        let shift = usize::from(narrow);

        let category = if narrow {
            None
        } else {
            self.category
                .and_then(|c| c.get(cells, 0))
                .filter(|c| !c.is_empty())
        };

        let description = self.description.get(cells, shift)?;
        if description.is_empty() {
            return None;
        }

        let sku = match self.sku {
            SkuColumn::None => None,
            SkuColumn::At(col) => col.get(cells, shift).filter(|s| !s.is_empty()),
            SkuColumn::Required(col) => Some(col.get(cells, shift).filter(|s| is_sku(s))?),
            SkuColumn::Scan => {
                let start = self.description_index(cells.len(), shift)? + 1;
                let end = cells.len().saturating_sub(1);
                cells
                    .get(start..end)
                    .and_then(|middle| middle.iter().copied().find(|c| is_sku(c)))
            }
        };

        let quantity = self
            .quantity
            .get(cells, shift)
            .and_then(parse_quantity);

        Some(ColumnRow {
            category,
            description,
            sku,
            quantity,
        })
    }

    fn description_index(&self, len: usize, shift: usize) -> Option<usize> {
        match self.description {
            ColumnRef::Start(i) => i.checked_sub(shift),
            ColumnRef::End(i) => len.checked_sub(i + 1),
        }
    }
}
