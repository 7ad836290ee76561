//! Rendering result with statistics.

use crate::detect::Dialect;
use serde::{Deserialize, Serialize};

/// Result of rendering a quote, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered text
    pub content: String,

    /// Dialect the quote was parsed as
    pub dialect: Dialect,

    /// Rendering statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, dialect: Dialect, stats: ExtractionStats) -> Self {
        Self {
            content,
            dialect,
            stats,
        }
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of product sections rendered
    pub section_count: u32,

    /// Number of item bullets rendered
    pub item_count: u32,

    /// Items whose displayed quantity was collapsed to 1
    pub collapsed_quantity_count: u32,

    /// In-band warnings emitted (sentinels and empty sections)
    pub warning_count: u32,

    /// Lines in the rendered output
    pub line_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Record one rendered item.
    pub fn add_item(&mut self, collapsed: bool) {
        self.item_count += 1;
        if collapsed {
            self.collapsed_quantity_count += 1;
        }
    }

    /// Increment warning count.
    pub fn add_warning(&mut self) {
        self.warning_count += 1;
    }

    /// Count lines of the final output.
    pub fn count_lines(&mut self, text: &str) {
        self.line_count += text.lines().count() as u32;
    }

    /// True when the output carries any warning.
    pub fn has_warnings(&self) -> bool {
        self.warning_count > 0
    }

}
