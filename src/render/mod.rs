//! Rendering module for turning parsed quotes into text or JSON.

mod json;
mod markdown;
mod options;
mod result;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{BulletStyle, FormatOptions, SEPARATOR_BLANK, SEPARATOR_RULE};
pub use result::{ExtractionStats, RenderResult};
