//! Nuclear grade finder ("Grade 1", "Nuclear grade 2", "tumor grade 10").
//!
//! Two section heuristics keep boilerplate out:
//!
//! - Everything from the grouped-scheme phrase ("Prognostic Nuclear Grade
//!   Group") onward is ignored; that scheme is not a simple grade.
//! - Matches starting after the last `COMMENTS` marker are addenda and are
//!   dropped. The marker search is case-sensitive while the grade pattern is
//!   not; both behaviours are pinned by tests.

use super::patterns::{self, GRADE_GROUP};
use crate::{AttributeKind, ExtractorConfig, MatchCandidate, TextWindow};

/// Windows shorter than this cannot hold "grade" plus a numeral.
const MIN_WINDOW_LEN: usize = 3;

/// Grade numeral to concept id.
const GRADE_CONCEPT_IDS: [(&str, &str); 10] = [
    ("1", "Nuclear_Grade_Score_1"),
    ("2", "Nuclear_Grade_Score_2"),
    ("3", "Nuclear_Grade_Score_3"),
    ("4", "Nuclear_Grade_Score_4"),
    ("5", "Nuclear_Grade_Score_5"),
    ("6", "Nuclear_Grade_Score_6"),
    ("7", "Nuclear_Grade_Score_7"),
    ("8", "Nuclear_Grade_Score_8"),
    ("9", "Nuclear_Grade_Score_9"),
    ("10", "Nuclear_Grade_Score_10"),
];

/// Concept id for a captured grade numeral, `None` outside 1..=10.
pub fn grade_concept_id(numeral: &str) -> Option<&'static str> {
    GRADE_CONCEPT_IDS.iter().find(|(n, _)| *n == numeral).map(|(_, id)| *id)
}

/// Finds grade mentions in a window.
#[derive(Debug, Clone, Copy)]
pub struct GradeFinder<'c> {
    config: &'c ExtractorConfig,
}

impl<'c> GradeFinder<'c> {
    pub fn new(config: &'c ExtractorConfig) -> Self {
        GradeFinder { config }
    }

    /// Admissible grade candidates in `window`, left to right.
    pub fn find(&self, window: &TextWindow<'_>) -> Vec<MatchCandidate> {
        self.find_in(window.text)
    }

    /// Same as [`GradeFinder::find`], over bare text (offsets relative to `text`).
    pub fn find_in(&self, text: &str) -> Vec<MatchCandidate> {
        let text = self.searchable(text);
        if text.len() < MIN_WINDOW_LEN {
            return Vec::new();
        }

        let marker = self.config.comments_marker.as_str();
        let cutoff = if marker.is_empty() { None } else { text.rfind(marker) };

        patterns::grade()
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let numeral = caps.name(GRADE_GROUP)?;

                if cutoff.is_some_and(|at| whole.start() > at) {
                    return None;
                }
                // "grade 12" is not grade 1.
                if text[numeral.end()..].starts_with(|c: char| c.is_ascii_digit()) {
                    return None;
                }

                Some(MatchCandidate {
                    kind: AttributeKind::Grade,
                    match_start: whole.start(),
                    match_end: whole.end(),
                    value_start: numeral.start(),
                    value_end: numeral.end(),
                    category_key: grade_concept_id(numeral.as_str())?.to_string(),
                })
            })
            .collect()
    }

    /// `text` cut before the grouped-scheme phrase, if present.
    fn searchable<'t>(&self, text: &'t str) -> &'t str {
        let phrase = self.config.grade_group_phrase.as_str();
        match text.find(phrase) {
            Some(at) if !phrase.is_empty() => {
                tracing::trace!(at, "grade search truncated at grade group phrase");
                &text[..at]
            }
            _ => text,
        }
    }
}
