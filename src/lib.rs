extern crate self as gradesize;

#[macro_use]
mod macros;
mod annotation;
mod api;
mod config;
mod document;
mod engine;
mod error;
mod rules;
mod table;

pub use annotation::{
    AnnotationFactory, AnnotationId, AnnotationIndex, AnnotationStore, AttributeAnnotation, AttributeCategory,
    DocumentIndex, PriorAnnotation,
};
pub use api::{
    AttributeSet, ExtractionDetails, ExtractionResult, ExtractionResultVerbose, Options, SizeScope, extract,
    extract_verbose_with, extract_with,
};
pub use config::ExtractorConfig;
pub use document::{Document, TextWindow};
pub use engine::{AbsoluteCandidate, RunMetrics, StageMetrics, suppress_contained, to_absolute};
pub use error::{Error, Result};
pub use rules::{GradeFinder, SizeFinder, grade_concept_id};
pub use table::{HEADER, MentionRow, mention_rows, mention_rows_with_priors, write_table};

// --- Shared types -----------------------------------------------------------

/// Which attribute a candidate (or a stage) is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Grade,
    Size,
}

/// Half-open byte range `[start, end)`.
///
/// Whether the offsets are window-relative or document-absolute depends on
/// where the span came from; the engine converts with [`to_absolute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `other` lies entirely inside `self` (edges included).
    pub fn contains(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// A raw pattern match, before it becomes an annotation.
///
/// All offsets are relative to the window the finder scanned:
///
/// ```text
/// window:  "... Nuclear grade 2 present."
///               ^match_start    ^value_start
///                                ^value_end == match_end
/// ```
///
/// Invariant: `match_start <= value_start <= value_end <= match_end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub kind: AttributeKind,
    pub match_start: usize,
    pub match_end: usize,
    pub value_start: usize,
    pub value_end: usize,
    /// Grade concept id (`Nuclear_Grade_Score_2`) or the literal size text.
    pub category_key: String,
}

impl MatchCandidate {
    pub fn match_span(&self) -> Span {
        Span::new(self.match_start, self.match_end)
    }

    pub fn value_span(&self) -> Span {
        Span::new(self.value_start, self.value_end)
    }

    /// Slice of `window` covered by the whole match.
    pub fn match_text<'a>(&self, window: &TextWindow<'a>) -> &'a str {
        window.text.get(self.match_start..self.match_end).unwrap_or("")
    }

    /// Slice of `window` covered by the semantic value.
    pub fn value_text<'a>(&self, window: &TextWindow<'a>) -> &'a str {
        window.text.get(self.value_start..self.value_end).unwrap_or("")
    }
}
