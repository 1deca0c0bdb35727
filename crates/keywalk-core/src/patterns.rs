use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::consts;
use crate::metrics::MetricSet;
use crate::trace::KeyTrace;
use crate::walks::WalkRun;

/// Substrings flagged outright, independent of geometry. Matched against the
/// lowercased input, so the list stays lowercase.
pub const KNOWN_SUBSTRINGS: [&str; 7] =
    ["qwerty", "asdf", "zxcv", "1234", "password", "pass", "admin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Bad,
    Good,
    Info,
}

/// One detector verdict. The variants carry exactly the evidence the
/// detector had, so report layers can format without recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FindingKind {
    /// The input contains a well-known weak substring.
    KnownSubstring { needle: String },
    /// A maximal adjacent run of at least MIN_WALK_POINTS keys.
    Walk { seq: String },
    /// An n-gram occurring at least MIN_NGRAM_REPEATS times.
    Repeat { gram: String, count: usize },
    /// Long input with at most one direction change.
    StraightLine { turns: usize },
    /// Long input dominated by key-adjacent steps.
    HighAdjacency { ratio: f32 },
    /// Step directions concentrated in few compass sectors.
    LowEntropy { bits: f32 },
    /// Near-uniform step distances.
    MonotonicStep { cv: f32 },
    /// Many steps in the chess-knight displacement window; usually a sign
    /// of non-keyboard-derived input rather than a weakness.
    KnightMove { ratio: f32 },
    /// Characters that could not be placed on the keyboard.
    UnknownChars { chars: String },
    /// Nothing weak detected.
    NoPattern,
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            Self::KnownSubstring { .. }
            | Self::Walk { .. }
            | Self::Repeat { .. }
            | Self::StraightLine { .. }
            | Self::HighAdjacency { .. }
            | Self::LowEntropy { .. }
            | Self::MonotonicStep { .. } => Severity::Bad,
            Self::KnightMove { .. } | Self::UnknownChars { .. } => Severity::Info,
            Self::NoPattern => Severity::Good,
        }
    }

    /// Whether this finding is a detected pattern occurrence. The scorer's
    /// pattern component counts only these, never the derived flags that
    /// already have their own score components.
    pub fn is_match(&self) -> bool {
        matches!(
            self,
            Self::KnownSubstring { .. } | Self::Walk { .. } | Self::Repeat { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(flatten)]
    pub kind: FindingKind,
    pub severity: Severity,
}

impl Finding {
    pub fn new(kind: FindingKind) -> Self {
        let severity = kind.severity();
        Self { kind, severity }
    }
}

/// Runs every detector over one analysis. `text_lc` must be the lowercased
/// input the trace was built from. Findings come out in a fixed order:
/// substrings, walks, repeats, geometry flags, knight note, unknown note,
/// then the no-pattern verdict when nothing bad fired on a non-empty input.
pub fn detect(
    text_lc: &str,
    trace: &KeyTrace,
    metrics: &MetricSet,
    walks: &[WalkRun],
) -> Vec<Finding> {
    let chars: Vec<char> = text_lc.chars().collect();
    let char_len = chars.len();
    let mut findings = Vec::new();

    for needle in KNOWN_SUBSTRINGS {
        if text_lc.contains(needle) {
            findings.push(Finding::new(FindingKind::KnownSubstring {
                needle: needle.to_string(),
            }));
        }
    }

    for run in walks {
        findings.push(Finding::new(FindingKind::Walk {
            seq: run.text.clone(),
        }));
    }

    let mut seen_repeats = HashSet::new();
    for n in consts::NGRAM_SIZES {
        collect_repeats(&chars, n, &mut seen_repeats, &mut findings);
    }

    if char_len >= consts::MIN_STRAIGHT_CHARS && metrics.turn_count <= 1 {
        findings.push(Finding::new(FindingKind::StraightLine {
            turns: metrics.turn_count,
        }));
    }
    if char_len >= consts::MIN_HIGH_ADJ_CHARS && metrics.adjacency_ratio > consts::HIGH_ADJACENCY {
        findings.push(Finding::new(FindingKind::HighAdjacency {
            ratio: metrics.adjacency_ratio,
        }));
    }
    if metrics.direction_entropy < consts::LOW_ENTROPY_BITS {
        findings.push(Finding::new(FindingKind::LowEntropy {
            bits: metrics.direction_entropy,
        }));
    }
    if metrics.step_cv < consts::LOW_STEP_CV {
        findings.push(Finding::new(FindingKind::MonotonicStep {
            cv: metrics.step_cv,
        }));
    }

    if metrics.knight_ratio >= consts::KNIGHT_INFO_RATIO {
        findings.push(Finding::new(FindingKind::KnightMove {
            ratio: metrics.knight_ratio,
        }));
    }

    if !trace.unknown.is_empty() {
        findings.push(Finding::new(FindingKind::UnknownChars {
            chars: trace.unknown.iter().map(|u| u.ch).collect(),
        }));
    }

    if char_len > 0 && !findings.iter().any(|f| f.severity == Severity::Bad) {
        findings.push(Finding::new(FindingKind::NoPattern));
    }

    findings
}

/// Sliding-window n-gram census over the lowercased input. Windows touching
/// whitespace are skipped; each qualifying gram is reported once, in order
/// of first appearance.
fn collect_repeats(
    chars: &[char],
    n: usize,
    seen: &mut HashSet<String>,
    findings: &mut Vec<Finding>,
) {
    if chars.len() < n {
        return;
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for window in chars.windows(n) {
        if window.iter().any(|c| c.is_whitespace()) {
            continue;
        }
        let gram: String = window.iter().collect();
        *counts.entry(gram).or_default() += 1;
    }

    for window in chars.windows(n) {
        if window.iter().any(|c| c.is_whitespace()) {
            continue;
        }
        let gram: String = window.iter().collect();
        let count = counts.get(&gram).copied().unwrap_or(0);
        if count >= consts::MIN_NGRAM_REPEATS && seen.insert(gram.clone()) {
            findings.push(Finding::new(FindingKind::Repeat { gram, count }));
        }
    }
}
