use keywalk_core::config::ScoreWeights;
use keywalk_core::metrics::MetricSet;
use keywalk_core::score::{score, DependencyScore, ScoreLabel};
use rstest::rstest;

fn metrics(adjacency: f32, entropy: f32, cv: f32, turns: usize) -> MetricSet {
    MetricSet {
        adjacency_ratio: adjacency,
        direction_entropy: entropy,
        step_cv: cv,
        turn_count: turns,
        ..Default::default()
    }
}

// --- LABELS ---

#[rstest]
#[case(0, ScoreLabel::Good)]
#[case(39, ScoreLabel::Good)]
#[case(40, ScoreLabel::Warning)]
#[case(59, ScoreLabel::Warning)]
#[case(60, ScoreLabel::Bad)]
#[case(100, ScoreLabel::Bad)]
fn label_cutoffs(#[case] value: u8, #[case] expected: ScoreLabel) {
    assert_eq!(ScoreLabel::from_value(value), expected);
}

// --- COMPONENTS ---

#[test]
fn perfect_walk_scores_one_hundred() {
    // Full adjacency, zero entropy, zero variation, straight, with patterns.
    let s = score(&metrics(1.0, 0.0, 0.0, 0), 6, 2, &ScoreWeights::default());
    assert_eq!(
        s,
        DependencyScore {
            value: 100,
            label: ScoreLabel::Bad
        }
    );
}

#[test]
fn adjacency_component_caps_at_the_high_threshold() {
    let w = ScoreWeights::default();
    // 0.70 and 1.0 both normalize to 1.0.
    let at_cap = score(&metrics(0.70, 3.0, 1.0, 5), 9, 0, &w);
    let above = score(&metrics(1.0, 3.0, 1.0, 5), 9, 0, &w);
    assert_eq!(at_cap.value, 30);
    assert_eq!(above.value, 30);
    // Half the threshold gives half the component.
    let half = score(&metrics(0.35, 3.0, 1.0, 5), 9, 0, &w);
    assert_eq!(half.value, 15);
}

#[test]
fn entropy_deficit_scales_linearly() {
    let w = ScoreWeights::default();
    // Entropy at the threshold contributes nothing.
    assert_eq!(score(&metrics(0.0, 1.5, 1.0, 5), 9, 0, &w).value, 0);
    // Zero entropy on a short input: full 0.25 band plus nothing else.
    assert_eq!(score(&metrics(0.0, 0.0, 1.0, 5), 3, 0, &w).value, 25);
    // Halfway down the band.
    assert_eq!(score(&metrics(0.0, 0.75, 1.0, 5), 3, 0, &w).value, 13);
}

#[test]
fn straight_component_follows_the_finding_gate() {
    let w = ScoreWeights::default();
    let m = metrics(0.0, 3.0, 1.0, 1);
    // One turn still counts as straight once the input is long enough.
    assert_eq!(score(&m, 4, 0, &w).value, 20);
    assert_eq!(score(&m, 3, 0, &w).value, 0, "too short for the gate");
    let twisty = metrics(0.0, 3.0, 1.0, 2);
    assert_eq!(score(&twisty, 9, 0, &w).value, 0);
}

#[test]
fn pattern_component_is_a_flag_not_a_count() {
    let w = ScoreWeights::default();
    let m = metrics(0.0, 3.0, 1.0, 5);
    assert_eq!(score(&m, 9, 1, &w).value, 15);
    assert_eq!(score(&m, 9, 7, &w).value, 15, "more matches add nothing");
    assert_eq!(score(&m, 9, 0, &w).value, 0);
}

#[test]
fn composite_clamps_to_one_hundred() {
    let w = ScoreWeights {
        w_adjacency: 2.0,
        ..Default::default()
    };
    let s = score(&metrics(1.0, 0.0, 0.0, 0), 9, 3, &w);
    assert_eq!(s.value, 100);
}

#[test]
fn custom_weights_reshape_the_score() {
    let only_pattern = ScoreWeights {
        w_adjacency: 0.0,
        w_low_entropy: 0.0,
        w_straight: 0.0,
        w_pattern: 1.0,
        w_low_cv: 0.0,
    };
    let m = metrics(1.0, 0.0, 0.0, 0);
    assert_eq!(score(&m, 9, 1, &only_pattern).value, 100);
    assert_eq!(score(&m, 9, 0, &only_pattern).value, 0);
}

// --- KNOWN INPUT VALUES ---

#[test]
fn qwerty123_metrics_fold_to_61() {
    // adjacency 7/8, entropy 0.5436 bits, cv 0.9586, 2 turns, 3 matches.
    let m = metrics(0.875, 0.5436, 0.9586, 2);
    let s = score(&m, 9, 3, &ScoreWeights::default());
    assert_eq!(s.value, 61);
    assert_eq!(s.label, ScoreLabel::Bad);
}

#[test]
fn empty_input_scores_the_entropy_and_cv_floors() {
    // All-zero metrics leave the deficit components at full band.
    let s = score(&MetricSet::default(), 0, 0, &ScoreWeights::default());
    assert_eq!(s.value, 35);
    assert_eq!(s.label, ScoreLabel::Good);
}
