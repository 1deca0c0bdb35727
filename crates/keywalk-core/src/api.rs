use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoreWeights;
use crate::keymap::{self, CoordMap};
use crate::layouts::KnownLayout;
use crate::metrics::MetricSet;
use crate::patterns::{self, Finding};
use crate::score::{self, DependencyScore};
use crate::trace::{KeyTrace, Point, UnknownChar};
use crate::walks;

/// Full result of one analysis: the plotted trace, its geometry, every
/// finding, and the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub layout: KnownLayout,
    pub points: Vec<Point>,
    pub unknown: Vec<UnknownChar>,
    pub metrics: MetricSet,
    pub findings: Vec<Finding>,
    pub score: DependencyScore,
}

/// Analyzes one candidate against a named layout. Total: unknown layout
/// names fall back to the default layout, unmappable input produces an
/// empty trace with zeroed metrics.
pub fn analyze_single(raw_text: &str, layout_name: &str, weights: &ScoreWeights) -> AnalysisReport {
    let map = keymap::build_coord_map(layout_name);
    analyze_with_map(raw_text, &map, weights)
}

/// Analysis core against a prebuilt coordinate map. Callers analyzing many
/// candidates build the map once and share it; the map is never mutated, so
/// sharing across threads is safe.
pub fn analyze_with_map(raw_text: &str, map: &CoordMap, weights: &ScoreWeights) -> AnalysisReport {
    let text_lc: String = raw_text.chars().flat_map(char::to_lowercase).collect();
    let char_len = text_lc.chars().count();

    let trace = KeyTrace::build(&text_lc, map);
    let metrics = MetricSet::compute(&trace.points);
    let walk_runs = walks::detect_walks(&trace);
    let findings = patterns::detect(&text_lc, &trace, &metrics, &walk_runs);

    let pattern_count = findings.iter().filter(|f| f.kind.is_match()).count();
    let score = score::score(&metrics, char_len, pattern_count, weights);

    debug!(
        layout = %map.layout,
        points = trace.points.len(),
        findings = findings.len(),
        score = score.value,
        "analysis complete"
    );

    AnalysisReport {
        layout: map.layout,
        points: trace.points,
        unknown: trace.unknown,
        metrics,
        findings,
        score,
    }
}

/// Analyzes a batch in parallel, preserving input order. The coordinate map
/// is built once up front so no analysis can observe a half-built table.
pub fn analyze_batch(
    lines: &[String],
    layout_name: &str,
    weights: &ScoreWeights,
) -> Vec<AnalysisReport> {
    let map = keymap::build_coord_map(layout_name);
    lines
        .par_iter()
        .map(|line| analyze_with_map(line, &map, weights))
        .collect()
}
