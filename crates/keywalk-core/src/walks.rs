use serde::{Deserialize, Serialize};

use crate::consts;
use crate::metrics;
use crate::trace::KeyTrace;

/// A maximal run of consecutively adjacent points. `start..end` indexes the
/// trace's point list; `text` is the run's source characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkRun {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Splits the trace's point sequence into maximal adjacent runs and keeps
/// those long enough to count as walks. Runs are disjoint and ordered;
/// unknown characters never appear in `points`, so they cannot break a run.
pub fn detect_walks(trace: &KeyTrace) -> Vec<WalkRun> {
    let points = &trace.points;
    let mut runs = Vec::new();
    if points.is_empty() {
        return runs;
    }

    let mut run_start = 0usize;
    for i in 1..points.len() {
        if metrics::is_adjacent(&points[i - 1], &points[i]) {
            continue;
        }
        flush_run(points, run_start, i, &mut runs);
        run_start = i;
    }
    flush_run(points, run_start, points.len(), &mut runs);

    runs
}

fn flush_run(points: &[crate::trace::Point], start: usize, end: usize, runs: &mut Vec<WalkRun>) {
    if end - start < consts::MIN_WALK_POINTS {
        return;
    }
    runs.push(WalkRun {
        start,
        end,
        text: points[start..end].iter().map(|p| p.ch).collect(),
    });
}
