//! Quote parsing module.
//!
//! Raw text flows through the [line normalizer](normalize_lines), then the
//! strategy for the requested [`Dialect`](crate::Dialect) segments the lines
//! into product sections and extracts their items.

pub mod columns;
mod lines;
mod options;
mod quote_parser;
pub mod segment;
pub mod sku;
pub mod strategy;

pub use lines::normalize_lines;
pub use options::{KeywordSet, NoiseFilter, ParseOptions, DEFAULT_BOILERPLATE, DEFAULT_KEYWORDS};
pub use quote_parser::QuoteParser;
pub use segment::{segment, LineRole, Segment, TriggerPolicy};
pub use strategy::header_table::{header_row_positions, HeaderColumns};
pub use strategy::{strategy_for, DialectStrategy};
