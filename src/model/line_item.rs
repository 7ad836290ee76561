//! A single component line of a configuration.

use serde::Serialize;

/// One extracted component: description, optional SKU and quantity.
///
/// Fields are read-only once constructed; quantity normalization changes
/// only how the quantity is displayed, never the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    category: Option<String>,
    description: String,
    sku: Option<String>,
    quantity: u32,
}

impl LineItem {
    /// Create an item. A zero quantity is raised to 1.
    pub fn new(description: impl Into<String>, quantity: u32) -> Self {
        Self {
            category: None,
            description: description.into(),
            sku: None,
            quantity: quantity.max(1),
        }
    }

    /// Attach a SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Attach a category label (e.g. "Memory").
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Category label, if the source row had one.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    /// Quantity as parsed from the source.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Description with the category as a prefix: `Memory: 16GB RAM`.
    pub fn label(&self) -> String {
        match &self.category {
            Some(category) => format!("{}: {}", category, self.description),
            None => self.description.clone(),
        }
    }
}
