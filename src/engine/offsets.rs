//! Window-relative to document-absolute offsets.
//!
//! Finders only ever see a window's text, so their offsets start at zero at the
//! window's first byte. Everything downstream (factory, merger, table writer)
//! works in document coordinates; this is the single place that converts.

use crate::{MatchCandidate, Span};

/// A [`MatchCandidate`] in document coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteCandidate {
    pub match_start: usize,
    pub match_end: usize,
    pub value_start: usize,
    pub value_end: usize,
    pub category_key: String,
}

impl AbsoluteCandidate {
    pub fn match_span(&self) -> Span {
        Span::new(self.match_start, self.match_end)
    }

    /// Span an annotation for this candidate covers: value start to match end.
    pub fn annotation_span(&self) -> Span {
        Span::new(self.value_start, self.match_end)
    }
}

/// Shift every offset of `candidate` by the window's absolute start `base`.
pub fn to_absolute(base: usize, candidate: &MatchCandidate) -> AbsoluteCandidate {
    AbsoluteCandidate {
        match_start: base + candidate.match_start,
        match_end: base + candidate.match_end,
        value_start: base + candidate.value_start,
        value_end: base + candidate.value_end,
        category_key: candidate.category_key.clone(),
    }
}
