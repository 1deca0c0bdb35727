mod tables;

pub use self::tables::{
    findings as print_findings, metrics as print_metrics, profile as print_profile,
    scan_rows as print_scan_rows, scan_summary as print_scan_summary, score as print_score,
};

use keywalk_core::patterns::{Finding, FindingKind};

/// One-line description of a finding with its evidence inlined. Shared by
/// the findings table and the scan ranking.
pub fn finding_label(finding: &Finding) -> String {
    match &finding.kind {
        FindingKind::KnownSubstring { needle } => format!("known substring \"{}\"", needle),
        FindingKind::Walk { seq } => format!("keyboard walk \"{}\"", seq),
        FindingKind::Repeat { gram, count } => format!("repeat {}×{}", gram, count),
        FindingKind::StraightLine { turns } => format!("straight line ({} turns)", turns),
        FindingKind::HighAdjacency { ratio } => format!("high adjacency ({:.2})", ratio),
        FindingKind::LowEntropy { bits } => format!("low direction entropy ({:.2} bits)", bits),
        FindingKind::MonotonicStep { cv } => format!("uniform step distances (cv {:.2})", cv),
        FindingKind::KnightMove { ratio } => format!("knight-move steps ({:.2})", ratio),
        FindingKind::UnknownChars { chars } => format!("unplaced characters \"{}\"", chars),
        FindingKind::NoPattern => "no pattern detected".to_string(),
    }
}
