mod common;

use common::qwerty_map;
use keywalk_core::metrics::MetricSet;
use keywalk_core::patterns::{self, Finding, FindingKind, Severity};
use keywalk_core::trace::KeyTrace;
use keywalk_core::walks;
use rstest::rstest;

/// Runs the full detector pipeline the way the api module wires it.
fn findings_for(input: &str) -> Vec<Finding> {
    let text_lc: String = input.chars().flat_map(char::to_lowercase).collect();
    let trace = KeyTrace::build(&text_lc, &qwerty_map());
    let metrics = MetricSet::compute(&trace.points);
    let walk_runs = walks::detect_walks(&trace);
    patterns::detect(&text_lc, &trace, &metrics, &walk_runs)
}

fn kinds(findings: &[Finding]) -> Vec<&FindingKind> {
    findings.iter().map(|f| &f.kind).collect()
}

// --- KNOWN SUBSTRINGS ---

#[test]
fn substring_match_is_case_insensitive() {
    let found = findings_for("XxQWERTYxx");
    assert!(found.iter().any(|f| matches!(
        &f.kind,
        FindingKind::KnownSubstring { needle } if needle == "qwerty"
    )));
}

#[test]
fn overlapping_needles_both_fire() {
    // "password" contains "pass" as well; both entries report, in list order.
    let found = findings_for("password");
    let needles: Vec<&str> = found
        .iter()
        .filter_map(|f| match &f.kind {
            FindingKind::KnownSubstring { needle } => Some(needle.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(needles, vec!["password", "pass"]);
}

// --- REPEATS ---

#[test]
fn repeated_bigram_reports_once_with_its_count() {
    let found = findings_for("ababab");
    let repeats: Vec<(&str, usize)> = found
        .iter()
        .filter_map(|f| match &f.kind {
            FindingKind::Repeat { gram, count } => Some((gram.as_str(), *count)),
            _ => None,
        })
        .collect();
    // "ab" occurs 3 times, "ba" only twice; longer grams stay below 3.
    assert_eq!(repeats, vec![("ab", 3)]);
}

#[test]
fn repeat_windows_skip_whitespace() {
    let found = findings_for("ab ab ab");
    let repeats: Vec<(&str, usize)> = found
        .iter()
        .filter_map(|f| match &f.kind {
            FindingKind::Repeat { gram, count } => Some((gram.as_str(), *count)),
            _ => None,
        })
        .collect();
    assert_eq!(repeats, vec![("ab", 3)], "windows across spaces must not count");
}

#[test]
fn all_sizes_can_report_for_one_input() {
    // "abcabcabc": at n=2 "ab" and "bc" reach 3 ("ca" only 2); at n=3 "abc"
    // reaches 3; 4-grams top out at 2.
    let found = findings_for("abcabcabc");
    let grams: Vec<&str> = found
        .iter()
        .filter_map(|f| match &f.kind {
            FindingKind::Repeat { gram, .. } => Some(gram.as_str()),
            _ => None,
        })
        .collect();
    assert!(grams.contains(&"ab"));
    assert!(grams.contains(&"abc"));
    assert!(!grams.contains(&"abca"), "4-grams only reach count 2");
}

// --- DERIVED FLAGS ---

#[test]
fn straight_line_needs_length_and_few_turns() {
    assert!(findings_for("asdfgh")
        .iter()
        .any(|f| matches!(f.kind, FindingKind::StraightLine { turns: 0 })));
    // Long enough but turns twice.
    assert!(!findings_for("qwerty123")
        .iter()
        .any(|f| matches!(f.kind, FindingKind::StraightLine { .. })));
    // Straight but too short.
    assert!(!findings_for("asd")
        .iter()
        .any(|f| matches!(f.kind, FindingKind::StraightLine { .. })));
}

#[test]
fn high_adjacency_needs_six_chars() {
    assert!(!findings_for("asdfg")
        .iter()
        .any(|f| matches!(f.kind, FindingKind::HighAdjacency { .. })));
    assert!(findings_for("asdfgh")
        .iter()
        .any(|f| matches!(f.kind, FindingKind::HighAdjacency { .. })));
}

// --- INFORMATIONAL FINDINGS ---

#[test]
fn knight_steps_are_informational() {
    // q -> v is a clean knight displacement (144, 68).
    let found = findings_for("qv");
    let knight = found
        .iter()
        .find(|f| matches!(f.kind, FindingKind::KnightMove { .. }))
        .expect("knight note expected");
    assert_eq!(knight.severity, Severity::Info);
}

#[test]
fn unknown_chars_report_in_input_order() {
    let found = findings_for("q€ w");
    let unknown = found
        .iter()
        .find_map(|f| match &f.kind {
            FindingKind::UnknownChars { chars } => Some(chars.as_str()),
            _ => None,
        })
        .expect("unknown-chars note expected");
    assert_eq!(unknown, "€ ");
}

// --- VERDICT ---

#[test]
fn random_looking_input_gets_exactly_no_pattern() {
    let found = findings_for("xK9#mQ2$vL");
    assert_eq!(kinds(&found), vec![&FindingKind::NoPattern]);
    assert_eq!(found[0].severity, Severity::Good);
}

#[test]
fn no_pattern_is_suppressed_on_empty_input() {
    let found = findings_for("");
    assert!(!found
        .iter()
        .any(|f| matches!(f.kind, FindingKind::NoPattern)));
}

#[test]
fn findings_come_out_in_detector_order() {
    // Substrings, then walks, then the geometry flags.
    let found = findings_for("qwerty123");
    assert_eq!(found.len(), 5, "got {:?}", kinds(&found));
    assert!(
        matches!(&found[0].kind, FindingKind::KnownSubstring { needle } if needle == "qwerty")
    );
    assert!(matches!(&found[1].kind, FindingKind::Walk { seq } if seq == "qwerty"));
    assert!(matches!(&found[2].kind, FindingKind::Walk { seq } if seq == "123"));
    assert!(matches!(&found[3].kind, FindingKind::HighAdjacency { .. }));
    assert!(matches!(&found[4].kind, FindingKind::LowEntropy { .. }));
}

// --- SEVERITY TABLE ---

#[rstest]
#[case(FindingKind::KnownSubstring { needle: "qwerty".into() }, Severity::Bad)]
#[case(FindingKind::Walk { seq: "asdf".into() }, Severity::Bad)]
#[case(FindingKind::Repeat { gram: "ab".into(), count: 3 }, Severity::Bad)]
#[case(FindingKind::StraightLine { turns: 0 }, Severity::Bad)]
#[case(FindingKind::HighAdjacency { ratio: 0.9 }, Severity::Bad)]
#[case(FindingKind::LowEntropy { bits: 0.3 }, Severity::Bad)]
#[case(FindingKind::MonotonicStep { cv: 0.1 }, Severity::Bad)]
#[case(FindingKind::KnightMove { ratio: 0.5 }, Severity::Info)]
#[case(FindingKind::UnknownChars { chars: "€".into() }, Severity::Info)]
#[case(FindingKind::NoPattern, Severity::Good)]
fn severity_table(#[case] kind: FindingKind, #[case] expected: Severity) {
    assert_eq!(kind.severity(), expected);
    assert_eq!(Finding::new(kind.clone()).severity, expected);
}

#[rstest]
#[case(FindingKind::KnownSubstring { needle: "qwerty".into() }, true)]
#[case(FindingKind::Walk { seq: "asdf".into() }, true)]
#[case(FindingKind::Repeat { gram: "ab".into(), count: 3 }, true)]
#[case(FindingKind::StraightLine { turns: 0 }, false)]
#[case(FindingKind::HighAdjacency { ratio: 0.9 }, false)]
#[case(FindingKind::LowEntropy { bits: 0.3 }, false)]
#[case(FindingKind::MonotonicStep { cv: 0.1 }, false)]
#[case(FindingKind::KnightMove { ratio: 0.5 }, false)]
#[case(FindingKind::UnknownChars { chars: "€".into() }, false)]
#[case(FindingKind::NoPattern, false)]
fn only_detector_matches_count_as_patterns(#[case] kind: FindingKind, #[case] expected: bool) {
    assert_eq!(kind.is_match(), expected);
}
