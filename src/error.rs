//! Error types for quotefmt library.

use std::io;
use thiserror::Error;

/// Result type alias for quotefmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while formatting a quote.
///
/// Data-quality problems (no products, empty sections, malformed lines) are
/// not errors: they surface in-band as [`Sentinel`](crate::model::Sentinel)
/// warnings in the rendered output.
#[derive(Error, Debug)]
pub enum Error {
    /// The dialect tag is not one of the recognized input layouts.
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// I/O error when reading input or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An option value was rejected.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
