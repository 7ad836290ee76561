//! Formatting options and configuration.

use crate::detect::Dialect;
use crate::model::QuantityMode;

/// Horizontal rule between sections.
pub const SEPARATOR_RULE: &str = "\n\n---\n\n";

/// Blank line between sections.
pub const SEPARATOR_BLANK: &str = "\n\n";

/// How component bullets are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletStyle {
    /// `- **Memory: 16GB RAM** *(Qty: 1)*`
    #[default]
    Markdown,
    /// `• Memory: 16GB RAM (Qty: 1)`
    Plain,
}

/// Options for rendering a parsed quote.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Text placed between rendered sections
    pub section_separator: String,

    /// Bullet markup for items
    pub bullet_style: BulletStyle,

    /// Appended to every section title (e.g. " CTO")
    pub title_suffix: Option<String>,

    /// Heading level for section titles (1-6)
    pub heading_level: u8,

    /// Whether quantities are shown relative to the base quantity
    pub quantity_mode: QuantityMode,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl FormatOptions {
    /// Create new format options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional preset for a dialect.
    ///
    /// Tab tables come from the ordering tool's own export and read back as
    /// plain bullets under a "CTO" heading; every other dialect gets
    /// Markdown bullets under a "Custom Configuration" heading.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::TabModuleTable => Self::new()
                .with_bullet_style(BulletStyle::Plain)
                .with_title_suffix(" CTO")
                .with_separator(SEPARATOR_BLANK),
            _ => Self::new()
                .with_bullet_style(BulletStyle::Markdown)
                .with_title_suffix(" - Custom Configuration")
                .with_separator(SEPARATOR_RULE),
        }
    }

    /// Set the section separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.section_separator = separator.into();
        self
    }

    /// Set the bullet style.
    pub fn with_bullet_style(mut self, style: BulletStyle) -> Self {
        self.bullet_style = style;
        self
    }

    /// Set the title suffix.
    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = Some(suffix.into());
        self
    }

    /// Remove the title suffix.
    pub fn without_title_suffix(mut self) -> Self {
        self.title_suffix = None;
        self
    }

    /// Set the heading level.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Set the quantity display mode.
    pub fn with_quantity_mode(mut self, mode: QuantityMode) -> Self {
        self.quantity_mode = mode;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            section_separator: SEPARATOR_RULE.to_string(),
            bullet_style: BulletStyle::Markdown,
            title_suffix: None,
            heading_level: 3,
            quantity_mode: QuantityMode::RelativeToBase,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_builder() {
        let options = FormatOptions::new()
            .with_bullet_style(BulletStyle::Plain)
            .with_separator("\n")
            .with_title_suffix(" CTO")
            .with_heading_level(9);

        assert_eq!(options.bullet_style, BulletStyle::Plain);
        assert_eq!(options.section_separator, "\n");
        assert_eq!(options.title_suffix.as_deref(), Some(" CTO"));
        assert_eq!(options.heading_level, 6);
    }

    #[test]
    fn test_dialect_presets() {
        let tab = FormatOptions::for_dialect(Dialect::TabModuleTable);
        assert_eq!(tab.bullet_style, BulletStyle::Plain);
        assert_eq!(tab.title_suffix.as_deref(), Some(" CTO"));
        assert_eq!(tab.section_separator, SEPARATOR_BLANK);

        let html = FormatOptions::for_dialect(Dialect::HeaderAnchoredTable);
        assert_eq!(html.bullet_style, BulletStyle::Markdown);
        assert_eq!(html.title_suffix.as_deref(), Some(" - Custom Configuration"));
        assert_eq!(html.section_separator, SEPARATOR_RULE);
    }

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.heading_level, 3);
        assert!(options.title_suffix.is_none());
        assert_eq!(options.quantity_mode, QuantityMode::RelativeToBase);
    }
}
