use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::config::ScoreWeights;
use crate::consts;
use crate::metrics::MetricSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScoreLabel {
    Good,
    Warning,
    Bad,
}

impl ScoreLabel {
    pub fn from_value(value: u8) -> Self {
        if value >= consts::SCORE_BAD {
            Self::Bad
        } else if value >= consts::SCORE_WARNING {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

/// Composite keyboard-dependency score on a 0..=100 scale, higher meaning
/// more keyboard-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyScore {
    pub value: u8,
    pub label: ScoreLabel,
}

/// Folds the metric set into the weighted composite.
///
/// Components, each in [0, 1]:
/// - adjacency ratio normalized against HIGH_ADJACENCY, capped at 1;
/// - entropy deficit below LOW_ENTROPY_BITS, scaled to the full band;
/// - straight-line flag (same gate as the detector finding);
/// - detected-pattern flag, fed by `pattern_count`;
/// - step-variation deficit below LOW_STEP_CV, scaled to the full band.
///
/// `char_len` is the lowercased input length in code points; `pattern_count`
/// counts detector matches (substrings, walks, repeats), not derived flags.
pub fn score(
    metrics: &MetricSet,
    char_len: usize,
    pattern_count: usize,
    weights: &ScoreWeights,
) -> DependencyScore {
    let norm_adj = (metrics.adjacency_ratio / consts::HIGH_ADJACENCY).min(1.0);
    let low_entropy =
        ((consts::LOW_ENTROPY_BITS - metrics.direction_entropy) / consts::LOW_ENTROPY_BITS).max(0.0);
    let straight = if char_len >= consts::MIN_STRAIGHT_CHARS && metrics.turn_count <= 1 {
        1.0
    } else {
        0.0
    };
    let pattern = if pattern_count > 0 { 1.0 } else { 0.0 };
    let low_cv = ((consts::LOW_STEP_CV - metrics.step_cv) / consts::LOW_STEP_CV).max(0.0);

    let composite = weights.w_adjacency * norm_adj
        + weights.w_low_entropy * low_entropy
        + weights.w_straight * straight
        + weights.w_pattern * pattern
        + weights.w_low_cv * low_cv;

    let value = (composite * 100.0).round().clamp(0.0, 100.0) as u8;
    DependencyScore {
        value,
        label: ScoreLabel::from_value(value),
    }
}
