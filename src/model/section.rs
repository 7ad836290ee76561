//! Product sections.

use super::{displayed_quantity, LineItem, QuantityMode};
use serde::Serialize;

/// One configured product: its title, base quantity and component items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSection {
    /// Title from the base line (may be empty; the renderer falls back to
    /// "Product N")
    pub title: String,

    /// Component items, in source order
    pub items: Vec<LineItem>,

    /// Quantity declared on the base line, or the first item's quantity
    pub base_quantity: u32,
}

impl ProductSection {
    /// Create an empty section.
    pub fn new(title: impl Into<String>, base_quantity: u32) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            base_quantity: base_quantity.max(1),
        }
    }

    /// Append an item.
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// True when no component line was extracted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity to display for an item of this section.
    pub fn displayed_quantity(&self, item: &LineItem, mode: QuantityMode) -> u32 {
        displayed_quantity(item.quantity(), self.base_quantity, mode)
    }
}
