//! Tumor size finder ("1.2 cm", "1.2 x 0.8 cm", "3 x 2 x 1.5 mm").
//!
//! Length x width x height wins over length x width, which wins over a lone
//! length. Selection is explicit rather than a property of one big alternation:
//!
//! ```text
//! cursor ──▶ s = leftmost start of any tier at or after cursor
//!            at s: tier 3 ? tier 2 ? tier 1   (first tier matching exactly at s)
//!            emit, cursor = match end
//! ```
//!
//! Because the cursor jumps past each emitted match, candidates never overlap,
//! and "2 x 3" is never emitted out of "2 x 3 x 4 cm".

use super::patterns;
use crate::{AttributeKind, MatchCandidate, TextWindow};
use regex::Match;

/// Windows shorter than this cannot hold a number plus a unit.
const MIN_WINDOW_LEN: usize = 2;

/// Finds size measurements in a window or a whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeFinder;

impl SizeFinder {
    pub fn new() -> Self {
        SizeFinder
    }

    /// Non-overlapping size candidates in `window`, left to right.
    pub fn find(&self, window: &TextWindow<'_>) -> Vec<MatchCandidate> {
        self.find_in(window.text)
    }

    /// Same as [`SizeFinder::find`], over bare text (offsets relative to `text`).
    pub fn find_in(&self, text: &str) -> Vec<MatchCandidate> {
        if text.len() < MIN_WINDOW_LEN {
            return Vec::new();
        }

        let tiers = patterns::size_tiers();
        let mut next: [Option<Match<'_>>; 3] = [None; 3];
        let mut exhausted = [false; 3];
        let mut found = Vec::new();
        let mut cursor = 0;

        while cursor <= text.len() {
            refresh(&tiers, &mut next, &mut exhausted, text, cursor);

            let Some(start) = next.iter().flatten().map(|m| m.start()).min() else {
                break;
            };
            // Most specific tier whose leftmost match sits at `start`.
            let Some(m) = next.iter().flatten().find(|m| m.start() == start).copied() else {
                break;
            };

            found.push(candidate(&m));
            cursor = m.end();
        }

        found
    }
}

/// Re-search only the tiers whose cached match starts before `cursor`.
///
/// A cached match at or after the cursor is still that tier's leftmost match
/// from the cursor, and a tier with no match left stays exhausted, so every
/// byte is searched a bounded number of times per tier.
fn refresh<'t>(
    tiers: &[&regex::Regex; 3],
    next: &mut [Option<Match<'t>>; 3],
    exhausted: &mut [bool; 3],
    text: &'t str,
    cursor: usize,
) {
    for (idx, re) in tiers.iter().enumerate() {
        if exhausted[idx] || next[idx].is_some_and(|m| m.start() >= cursor) {
            continue;
        }
        next[idx] = re.find_at(text, cursor);
        exhausted[idx] = next[idx].is_none();
    }
}

fn candidate(m: &Match<'_>) -> MatchCandidate {
    MatchCandidate {
        kind: AttributeKind::Size,
        match_start: m.start(),
        match_end: m.end(),
        value_start: m.start(),
        value_end: m.end(),
        category_key: m.as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        SizeFinder::new().find_in(input).into_iter().map(|c| c.category_key).collect()
    }

    #[test]
    fn three_part_beats_shorter_tiers() {
        let found = SizeFinder::new().find_in("Tumor measures 2.0 x 1.5 x 1.0 cm");

        assert_eq!(found.len(), 1);
        assert_eq!((found[0].match_start, found[0].match_end), (15, 33));
        assert_eq!(found[0].category_key, "2.0 x 1.5 x 1.0 cm");
        assert_eq!(found[0].value_span(), found[0].match_span());
    }

    #[test]
    fn units_and_separators_between_every_part() {
        assert_eq!(texts("mass of 3 cm x 2 cm by 1 cm"), ["3 cm x 2 cm by 1 cm"]);
        assert_eq!(texts("4 & 5 mm"), ["4 & 5 mm"]);
    }

    #[test]
    fn two_part_measurement() {
        assert_eq!(texts("a 2 x 3 cm nodule"), ["2 x 3 cm"]);
    }

    #[test]
    fn separate_single_measurements() {
        let found = SizeFinder::new().find_in("Lesion 1.2 cm, margin 3 mm");
        let spans: Vec<(usize, usize)> = found.iter().map(|c| (c.match_start, c.match_end)).collect();

        assert_eq!(spans, [(7, 13), (22, 26)]);
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!(texts("1.5 CM"), ["1.5 CM"]);
    }

    #[test]
    fn requires_unit_and_word_boundaries() {
        assert!(texts("2 x 3 lesions").is_empty());
        assert!(texts("2 cms").is_empty());
        assert!(texts("size2cm").is_empty());
    }

    #[test]
    fn long_documents_scan_every_measurement() {
        let text = "a 1 cm, ".repeat(12_500);
        let found = SizeFinder::new().find_in(&text);

        assert_eq!(found.len(), 12_500);
        assert_eq!((found[0].match_start, found[0].match_end), (2, 6));
        let last = &found[12_499];
        assert_eq!((last.match_start, last.match_end), (text.len() - 6, text.len() - 2));
    }

    #[test]
    fn lower_tier_match_ahead_does_not_hide_a_longer_one() {
        assert_eq!(texts("1 cm then 2 x 3 cm then 4 x 5 x 6 mm"), ["1 cm", "2 x 3 cm", "4 x 5 x 6 mm"]);
    }

    #[test]
    fn short_or_empty_text_yields_nothing() {
        assert!(texts("").is_empty());
        assert!(texts("5").is_empty());
    }
}
