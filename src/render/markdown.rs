//! Text rendering for parsed quotes.

use crate::error::Result;
use crate::model::{LineItem, ProductSection, QuoteDocument, Sentinel};

use super::{BulletStyle, ExtractionStats, FormatOptions, RenderResult};

/// Render a parsed quote to text.
pub fn to_markdown(doc: &QuoteDocument, options: &FormatOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Render a parsed quote to text with statistics.
pub fn to_markdown_with_stats(doc: &QuoteDocument, options: &FormatOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Section-by-section renderer.
///
/// Each section becomes a heading followed by one bullet per item;
/// sections are joined with the configured separator. Sentinels and empty
/// sections render as visible warnings instead of being left out.
pub struct MarkdownRenderer {
    options: FormatOptions,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new renderer.
    pub fn new(options: FormatOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a quote.
    pub fn render(mut self, doc: &QuoteDocument) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a quote with statistics.
    pub fn render_with_stats(mut self, doc: &QuoteDocument) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);
        self.stats.count_lines(&content);

        Ok(RenderResult::new(content, doc.dialect, self.stats))
    }

    fn render_internal(&mut self, doc: &QuoteDocument) -> String {
        if let Some(sentinel) = doc.sentinel {
            self.record_warning();
            return sentinel.message().to_string();
        }

        let blocks: Vec<String> = doc
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| self.render_section(index, section))
            .collect();

        blocks.join(&self.options.section_separator)
    }

    fn render_section(&mut self, index: usize, section: &ProductSection) -> String {
        if self.options.collect_stats {
            self.stats.add_section();
        }

        let mut output = self.heading(index, section);
        output.push('\n');

        if section.is_empty() {
            self.record_warning();
            output.push_str(Sentinel::NoSpecsExtracted.message());
            return output;
        }

        let bullets: Vec<String> = section
            .items
            .iter()
            .map(|item| self.render_item(section, item))
            .collect();
        output.push_str(&bullets.join("\n"));
        output
    }

    fn heading(&self, index: usize, section: &ProductSection) -> String {
        let level = self.options.heading_level.clamp(1, 6) as usize;
        let title = match section.title.trim() {
            "" => format!("Product {}", index + 1),
            title => title.to_string(),
        };
        let suffix = self.options.title_suffix.as_deref().unwrap_or("");
        format!("{} {}{}", "#".repeat(level), title, suffix)
    }

    fn render_item(&mut self, section: &ProductSection, item: &LineItem) -> String {
        let quantity = section.displayed_quantity(item, self.options.quantity_mode);
        if self.options.collect_stats {
            self.stats.add_item(quantity != item.quantity());
        }

        let label = item.label();
        match self.options.bullet_style {
            BulletStyle::Markdown => format!("- **{}** *(Qty: {})*", label, quantity),
            BulletStyle::Plain => format!("• {} (Qty: {})", label, quantity),
        }
    }

    fn record_warning(&mut self) {
        if self.options.collect_stats {
            self.stats.add_warning();
        }
    }
}
