//! Quote model types.
//!
//! This module defines the intermediate representation between the dialect
//! parsers and the renderer. Every value is built fresh for one formatting
//! call and discarded after rendering.

mod document;
mod line_item;
mod quantity;
mod section;

pub use document::{QuoteDocument, Sentinel};
pub use line_item::LineItem;
pub use quantity::{displayed_quantity, QuantityMode};
pub use section::ProductSection;
