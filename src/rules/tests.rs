use crate::rules::{GradeFinder, SizeFinder};
use crate::{Document, ExtractorConfig, MatchCandidate, Span, TextWindow, to_absolute};

fn grades(text: &str) -> Vec<String> {
    let config = ExtractorConfig::default();
    let window = TextWindow::new(0, text);
    GradeFinder::new(&config).find(&window).iter().map(|c| c.match_text(&window).to_string()).collect()
}

fn sizes(text: &str) -> Vec<String> {
    let window = TextWindow::new(0, text);
    SizeFinder::new().find(&window).iter().map(|c| c.match_text(&window).to_string()).collect()
}

#[test]
fn no_mentions_no_candidates() {
    let inputs = [
        "",
        "x",
        "Benign breast tissue with fibrocystic change.",
        "Margins are negative. See synoptic report.",
        "Gradient 3 x measured",
    ];

    for input in inputs {
        assert!(grades(input).is_empty(), "unexpected grade in {input:?}: {:?}", grades(input));
        assert!(sizes(input).is_empty(), "unexpected size in {input:?}: {:?}", sizes(input));
    }
}

#[test]
fn grade_examples() {
    // (input, expected whole-match texts)
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("Nuclear grade 2 present.", vec!["Nuclear grade 2"]),
        ("NUCLEAR GRADE 3", vec!["NUCLEAR GRADE 3"]),
        ("Tumor grade: 1", vec![]),
        ("tumor grade1, grade10", vec!["tumor grade1", "grade10"]),
        ("Histologic grade 2 of 3", vec!["grade 2"]),
        ("grade 11", vec![]),
        ("Nuclear grade 2 and nuclear grade 3", vec!["Nuclear grade 2", "nuclear grade 3"]),
    ];

    for (input, expected) in cases {
        assert_eq!(grades(input), expected, "input {input:?}");
    }
}

#[test]
fn grade_value_and_category_key() {
    let config = ExtractorConfig::default();
    let window = TextWindow::new(0, "Nuclear grade 2 present.");
    let found = GradeFinder::new(&config).find(&window);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value_text(&window), "2");
    assert_eq!(found[0].category_key, crate::grade_concept_id("2").unwrap());
}

#[test]
fn grade_group_phrase_truncates_search() {
    let text = "Histologic grade 2 seen earlier. Prognostic Nuclear Grade Group 3 of 3, grade 1 focally.";
    assert_eq!(grades(text), ["grade 2"]);

    // Nothing before the phrase: nothing at all.
    assert!(grades("Prognostic Nuclear Grade Group 3, nuclear grade 2").is_empty());

    // Phrase match is case-sensitive.
    assert!(grades("Prognostic Nuclear Grade Group: grade 2").is_empty());
    assert_eq!(grades("prognostic nuclear grade group: grade 2"), ["grade 2"]);
}

#[test]
fn comments_marker_cuts_off_later_grades() {
    assert_eq!(grades("Findings: grade 1 carcinoma. COMMENTS: grade 3 added later"), ["grade 1"]);

    // Only the last marker counts.
    assert_eq!(grades("COMMENTS none. grade 2 here. COMMENTS: grade 3"), ["grade 2"]);

    // A match starting exactly at the marker's position is still admissible.
    let config = ExtractorConfig { comments_marker: "grade 3".to_string(), ..ExtractorConfig::default() };
    let found = GradeFinder::new(&config).find_in("grade 3");
    assert_eq!(found.len(), 1);
}

#[test]
fn comments_marker_is_case_sensitive() {
    // Lowercase "comments" is not the marker, so the later grade is kept.
    assert_eq!(grades("grade 1. comments: grade 3"), ["grade 1", "grade 3"]);
    assert_eq!(grades("grade 1. Comments: grade 3"), ["grade 1", "grade 3"]);
    assert_eq!(grades("grade 1. COMMENTS: grade 3"), ["grade 1"]);
}

#[test]
fn size_examples() {
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("Tumor measures 2.0 x 1.5 x 1.0 cm", vec!["2.0 x 1.5 x 1.0 cm"]),
        ("2 x 3 x 4 cm", vec!["2 x 3 x 4 cm"]),
        ("3.5 by 2.0 cm", vec!["3.5 by 2.0 cm"]),
        ("1.0 cm to 1.5 cm", vec!["1.0 cm to 1.5 cm"]),
        ("Lesion 12 mm; margin 0.2 cm", vec!["12 mm", "0.2 cm"]),
        ("2 cm; 3 cm separately", vec!["2 cm", "3 cm"]),
        // "and" is a separator, so this reads as one two-part measurement.
        ("2 cm and 3 cm separately", vec!["2 cm and 3 cm"]),
        ("1.1x0.9x0.4cm fragment", vec!["1.1x0.9x0.4cm"]),
        // No tier fits at "5", so the scan moves on to the next start.
        ("5 x 4 x 3 x 2 cm", vec!["4 x 3 x 2 cm"]),
    ];

    for (input, expected) in cases {
        assert_eq!(sizes(input), expected, "input {input:?}");
    }
}

#[test]
fn size_candidates_never_overlap() {
    let text = "1 x 2 cm 3 x 4 x 5 mm 6 cm 7mm 8 and 9 cm";
    let found = SizeFinder::new().find_in(text);

    assert!(!found.is_empty());
    for pair in found.windows(2) {
        assert!(pair[0].match_end <= pair[1].match_start, "overlap: {pair:?}");
    }
}

#[test]
fn candidate_offsets_stay_ordered_and_in_bounds() {
    let config = ExtractorConfig::default();
    let text = "Nuclear grade 2, tumor grade 10; 2.0 x 1.5 x 1.0 cm and 4 mm.";
    let window = TextWindow::new(0, text);
    let found: Vec<MatchCandidate> =
        GradeFinder::new(&config).find(&window).into_iter().chain(SizeFinder::new().find(&window)).collect();

    assert!(!found.is_empty());
    for c in &found {
        assert!(c.match_start <= c.value_start, "{c:?}");
        assert!(c.value_start <= c.value_end, "{c:?}");
        assert!(c.value_end <= c.match_end, "{c:?}");
        assert!(c.match_end <= text.len(), "{c:?}");
    }
}

#[test]
fn absolute_offsets_reslice_document() {
    let text = "SPECIMEN: left breast.\nDIAGNOSIS: nuclear grade 3, 1.8 x 1.2 cm.\nCOMMENTS: none.";
    let doc = Document::new("d1", text)
        .with_sections([Span::new(0, 22), Span::new(23, 64), Span::new(65, text.len())])
        .unwrap();
    let config = ExtractorConfig::default();
    let mut seen = Vec::new();

    for window in doc.windows() {
        let found = GradeFinder::new(&config).find(&window).into_iter().chain(SizeFinder::new().find(&window));
        for candidate in found {
            let abs = to_absolute(window.start, &candidate);
            assert_eq!(abs.match_start, window.start + candidate.match_start);
            assert_eq!(abs.match_end, window.start + candidate.match_end);
            let resliced = doc.slice(abs.match_span()).unwrap();
            assert_eq!(resliced, candidate.match_text(&window));
            seen.push(resliced.to_string());
        }
    }

    assert_eq!(seen, ["nuclear grade 3", "1.8 x 1.2 cm"]);
}
