//! Quantity display normalization.

use serde::{Deserialize, Serialize};

/// How item quantities are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityMode {
    /// An item whose quantity equals the section's base quantity is
    /// "one per system" and displays as 1.
    #[default]
    RelativeToBase,
    /// Display quantities exactly as parsed.
    Raw,
}

/// Quantity to display for an item in a section with the given base
/// quantity.
pub fn displayed_quantity(quantity: u32, base_quantity: u32, mode: QuantityMode) -> u32 {
    match mode {
        QuantityMode::RelativeToBase if quantity == base_quantity => 1,
        _ => quantity,
    }
}
