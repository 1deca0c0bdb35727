use std::f32::consts::{PI, TAU};

use fnv::FnvHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::trace::Point;

/// Path geometry of one trace. Every field is total: fewer than two points
/// zero out the pairwise metrics, fewer than three zero out `turn_count`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSet {
    /// Distinct base keys pressed.
    pub unique_count: usize,
    /// Summed euclidean length of the path, in px.
    pub total_length: f32,
    /// Direction changes sharper than TURN_THRESHOLD radians.
    pub turn_count: usize,
    /// Fraction of consecutive pairs that are key-adjacent, in [0, 1].
    pub adjacency_ratio: f32,
    /// Shannon entropy of step directions over 8 compass sectors, in bits.
    pub direction_entropy: f32,
    /// Coefficient of variation of step distances.
    pub step_cv: f32,
    /// Fraction of steps landing in a chess-knight displacement window.
    pub knight_ratio: f32,
}

impl MetricSet {
    pub fn compute(points: &[Point]) -> Self {
        Self {
            unique_count: unique_count(points),
            total_length: total_length(points),
            turn_count: turn_count(points),
            adjacency_ratio: adjacency_ratio(points),
            direction_entropy: direction_entropy(points),
            step_cv: step_cv(points),
            knight_ratio: knight_ratio(points),
        }
    }
}

#[inline(always)]
pub fn euclidean_dist(a: &Point, b: &Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Key adjacency with the default deltas.
#[inline(always)]
pub fn is_adjacent(a: &Point, b: &Point) -> bool {
    is_adjacent_within(a, b, consts::ADJ_DX, consts::ADJ_DY)
}

#[inline(always)]
pub fn is_adjacent_within(a: &Point, b: &Point, dx_max: f32, dy_max: f32) -> bool {
    (a.x - b.x).abs() <= dx_max && (a.y - b.y).abs() <= dy_max
}

pub fn unique_count(points: &[Point]) -> usize {
    points.iter().map(|p| p.key).collect::<FnvHashSet<_>>().len()
}

pub fn total_length(points: &[Point]) -> f32 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| euclidean_dist(a, b))
        .sum()
}

/// Counts interior direction changes sharper than the turn threshold.
/// Zero-length segments contribute no angle; a non-finite angle (from
/// floating-point overshoot at cos = ±1) is skipped rather than clamped.
pub fn turn_count(points: &[Point]) -> usize {
    let mut turns = 0;
    for (a, b, c) in points.iter().tuple_windows() {
        let (v1x, v1y) = (b.x - a.x, b.y - a.y);
        let (v2x, v2y) = (c.x - b.x, c.y - b.y);
        let n1 = (v1x * v1x + v1y * v1y).sqrt();
        let n2 = (v2x * v2x + v2y * v2y).sqrt();
        if n1 == 0.0 || n2 == 0.0 {
            continue;
        }
        let angle = ((v1x * v2x + v1y * v2y) / (n1 * n2)).acos();
        if angle.is_finite() && angle > consts::TURN_THRESHOLD {
            turns += 1;
        }
    }
    turns
}

pub fn adjacency_ratio(points: &[Point]) -> f32 {
    adjacency_ratio_within(points, consts::ADJ_DX, consts::ADJ_DY)
}

pub fn adjacency_ratio_within(points: &[Point], dx_max: f32, dy_max: f32) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let adjacent = points
        .iter()
        .tuple_windows()
        .filter(|(a, b)| is_adjacent_within(a, b, dx_max, dy_max))
        .count();
    adjacent as f32 / (points.len() - 1) as f32
}

/// Shannon entropy of step directions, binned into DIRECTION_BINS compass
/// sectors. Zero-length steps carry no direction and are excluded from the
/// distribution entirely.
pub fn direction_entropy(points: &[Point]) -> f32 {
    let mut bins = [0usize; consts::DIRECTION_BINS];
    let mut used = 0usize;

    for (a, b) in points.iter().tuple_windows() {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        let angle = dy.atan2(dx);
        let bin = (((angle + PI) / TAU) * consts::DIRECTION_BINS as f32).round() as usize
            % consts::DIRECTION_BINS;
        bins[bin] += 1;
        used += 1;
    }

    if used == 0 {
        return 0.0;
    }

    bins.iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f32 / used as f32;
            -p * p.log2()
        })
        .sum()
}

/// Coefficient of variation (stddev / mean) of consecutive step distances.
/// A zero mean (all points stacked on one key) reports 0 rather than NaN.
pub fn step_cv(points: &[Point]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let dists: Vec<f32> = points
        .iter()
        .tuple_windows()
        .map(|(a, b)| euclidean_dist(a, b))
        .collect();

    let mean = dists.iter().sum::<f32>() / dists.len() as f32;
    if mean == 0.0 {
        return 0.0;
    }
    let variance = dists.iter().map(|d| (d - mean) * (d - mean)).sum::<f32>() / dists.len() as f32;
    variance.sqrt() / mean
}

/// Fraction of steps whose |dx|, |dy| land within KNIGHT_TOLERANCE of a
/// 2x1 or 1x2 key displacement at the nominal render pitches.
pub fn knight_ratio(points: &[Point]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let knight = points
        .iter()
        .tuple_windows()
        .filter(|(a, b)| {
            let dx = (a.x - b.x).abs();
            let dy = (a.y - b.y).abs();
            let two_across = (dx - 2.0 * consts::KNIGHT_H_PITCH).abs() <= consts::KNIGHT_TOLERANCE
                && (dy - consts::KNIGHT_V_PITCH).abs() <= consts::KNIGHT_TOLERANCE;
            let two_down = (dx - consts::KNIGHT_H_PITCH).abs() <= consts::KNIGHT_TOLERANCE
                && (dy - 2.0 * consts::KNIGHT_V_PITCH).abs() <= consts::KNIGHT_TOLERANCE;
            two_across || two_down
        })
        .count();
    knight as f32 / (points.len() - 1) as f32
}
