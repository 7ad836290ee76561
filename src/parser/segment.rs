//! Section segmentation: split normalized lines into per-product segments.

use super::columns::{split_tabs, split_whitespace_runs};
use super::header_row_positions;
use super::options::KeywordSet;

/// How a line participates in segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Starts a new segment.
    Trigger,
    /// Table scaffolding; dropped entirely.
    Structural,
    /// Belongs to the current segment.
    Body,
}

/// What makes a line start a new product segment.
#[derive(Debug, Clone, Copy)]
pub enum TriggerPolicy<'k> {
    /// Any keyword appears anywhere in the line.
    Keyword(&'k KeywordSet),
    /// A keyword appears in the given column of a whitespace-run split.
    KeywordInColumn {
        keywords: &'k KeywordSet,
        column: usize,
    },
    /// First tab column is `Base`; a first column of `Module` is a
    /// structural header.
    ColumnMarker,
    /// A `Description` / `SKU` / `Quantity` header row.
    HeaderRow,
}

impl TriggerPolicy<'_> {
    /// Classify one normalized line.
    pub fn classify(&self, line: &str) -> LineRole {
        let is_trigger = match self {
            TriggerPolicy::Keyword(keywords) => keywords.matches(line),
            TriggerPolicy::KeywordInColumn { keywords, column } => split_whitespace_runs(line)
                .get(*column)
                .is_some_and(|cell| keywords.matches(cell)),
            TriggerPolicy::ColumnMarker => {
                let first = split_tabs(line).first().copied().unwrap_or("");
                if first.eq_ignore_ascii_case("module") {
                    return LineRole::Structural;
                }
                first.eq_ignore_ascii_case("base")
            }
            TriggerPolicy::HeaderRow => header_row_positions(line).is_some(),
        };

        if is_trigger {
            LineRole::Trigger
        } else {
            LineRole::Body
        }
    }
}

/// One product segment: the trigger line and everything up to the next
/// trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The line that started the segment.
    pub trigger: &'a str,
    /// The line directly before the trigger, if any.
    pub preceding: Option<&'a str>,
    /// Lines after the trigger, structural lines removed.
    pub body: Vec<&'a str>,
}

#[derive(Default)]
struct Accumulator<'a> {
    segments: Vec<Segment<'a>>,
    current: Option<Segment<'a>>,
    preamble: usize,
    structural: usize,
}

impl<'a> Accumulator<'a> {
    fn push(mut self, index: usize, lines: &'a [String], role: LineRole) -> Self {
        let line = lines[index].as_str();
        match role {
            LineRole::Trigger => {
                if let Some(done) = self.current.take() {
                    self.segments.push(done);
                }
                self.current = Some(Segment {
                    trigger: line,
                    preceding: index.checked_sub(1).map(|i| lines[i].as_str()),
                    body: Vec::new(),
                });
            }
            LineRole::Structural => self.structural += 1,
            LineRole::Body => match self.current.as_mut() {
                Some(segment) => segment.body.push(line),
                None => self.preamble += 1,
            },
        }
        self
    }

    fn finish(mut self) -> Vec<Segment<'a>> {
        if let Some(done) = self.current.take() {
            self.segments.push(done);
        }
        log::debug!(
            "Segmenter: {} segments, {} preamble lines discarded, {} structural lines dropped",
            self.segments.len(),
            self.preamble,
            self.structural
        );
        self.segments
    }
}

/// Split lines into segments at every trigger.
///
/// Lines before the first trigger are discarded as title-less preamble.
/// Returns one segment per trigger, so an input with no trigger yields an
/// empty vector.
pub fn segment<'a>(lines: &'a [String], policy: &TriggerPolicy<'_>) -> Vec<Segment<'a>> {
    (0..lines.len())
        .fold(Accumulator::default(), |acc, index| {
            let role = policy.classify(&lines[index]);
            acc.push(index, lines, role)
        })
        .finish()
}
