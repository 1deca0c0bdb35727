use std::collections::BTreeSet;
use std::hash::Hash;

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::debug;

use crate::consts;
use crate::keymap::{self, CoordMap};
use crate::metrics;
use crate::trace::{KeyTrace, Point};

/// Frequency counter that remembers first-seen order, so equal counts rank
/// deterministically by appearance in the corpus.
#[derive(Debug, Default)]
struct FreqTable<K: Eq + Hash + Clone> {
    counts: FnvHashMap<K, u32>,
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> FreqTable<K> {
    fn bump(&mut self, key: K) {
        let count = self.counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            self.order.push(key);
        }
        *count += 1;
    }

    /// Top `k` entries by count, descending; ties keep first-seen order.
    fn top(&self, k: usize) -> Vec<(K, u32)> {
        let mut entries: Vec<(K, u32)> = self
            .order
            .iter()
            .map(|key| (key.clone(), self.counts[key]))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
    }
}

/// Structural habits matched against each raw (trimmed, case-preserving)
/// line. A line can satisfy several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum AffixPattern {
    /// Trailing digit run of 2..=6 digits whose value is a plausible year.
    YearSuffix,
    /// Line ends in a digit.
    DigitSuffix,
    /// Line ends in ASCII punctuation.
    PunctSuffix,
    /// Uppercase letter followed by a lowercase letter at the start.
    CapitalizedPrefix,
    /// Leading run of 2+ letters, all uppercase.
    UpperPrefix,
    /// Leading run of letters, all lowercase.
    LowerPrefix,
    /// Whole line is letters, then digits, then optional punctuation.
    WordDigitPunct,
}

/// The matcher table. New habit checks slot in here; nothing else needs to
/// change to report them.
pub const AFFIX_RULES: [(AffixPattern, fn(&str) -> bool); 7] = [
    (AffixPattern::YearSuffix, has_year_suffix),
    (AffixPattern::DigitSuffix, has_digit_suffix),
    (AffixPattern::PunctSuffix, has_punct_suffix),
    (AffixPattern::CapitalizedPrefix, has_capitalized_prefix),
    (AffixPattern::UpperPrefix, has_upper_prefix),
    (AffixPattern::LowerPrefix, has_lower_prefix),
    (AffixPattern::WordDigitPunct, is_word_digit_punct),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffixTally {
    pub pattern: AffixPattern,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCount {
    pub key: char,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigramCount {
    pub gram: String,
    pub count: u32,
}

/// Where the corpus presses land on the board, as fractions of all points.
/// Left/right split at the x midpoint of the used extent (strictly left of
/// the midpoint counts as left); top/middle/bottom split the y extent in
/// thirds. A degenerate y extent puts everything in `bottom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneBias {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub middle: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub line_count: usize,
    pub avg_total_length: f32,
    pub avg_turn_count: f32,
    pub avg_adjacency_ratio: f32,
    pub top_keys: Vec<KeyCount>,
    pub top_bigrams: Vec<BigramCount>,
    pub affixes: Vec<AffixTally>,
    pub zones: ZoneBias,
    pub used_keys: Vec<char>,
}

/// Aggregates structural habits over a corpus of candidate lines. Blank
/// lines (after trimming) are skipped; everything else contributes, however
/// unmappable. No scoring happens here.
pub fn analyze_profile(lines: &[String], layout_name: &str) -> ProfileSummary {
    let map = keymap::build_coord_map(layout_name);
    analyze_profile_with_map(lines, &map)
}

pub fn analyze_profile_with_map(lines: &[String], map: &CoordMap) -> ProfileSummary {
    let mut line_count = 0usize;
    let mut sum_length = 0.0f32;
    let mut sum_turns = 0.0f32;
    let mut sum_adjacency = 0.0f32;

    let mut key_freq: FreqTable<char> = FreqTable::default();
    let mut bigram_freq: FreqTable<String> = FreqTable::default();
    let mut used_keys: BTreeSet<char> = BTreeSet::new();
    let mut all_points: Vec<Point> = Vec::new();
    let mut affix_counts = [0usize; AFFIX_RULES.len()];

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;

        let lowered: String = line.chars().flat_map(char::to_lowercase).collect();
        let trace = KeyTrace::build(&lowered, map);

        sum_length += metrics::total_length(&trace.points);
        sum_turns += metrics::turn_count(&trace.points) as f32;
        sum_adjacency += metrics::adjacency_ratio(&trace.points);

        for point in &trace.points {
            key_freq.bump(point.key);
            used_keys.insert(point.key);
            all_points.push(*point);
        }

        let chars: Vec<char> = lowered.chars().collect();
        for window in chars.windows(2) {
            if window.iter().any(|c| c.is_whitespace()) {
                continue;
            }
            bigram_freq.bump(window.iter().collect());
        }

        for (i, (_, matcher)) in AFFIX_RULES.iter().enumerate() {
            if matcher(line) {
                affix_counts[i] += 1;
            }
        }
    }

    debug!(lines = line_count, keys = used_keys.len(), "profile aggregated");

    let divisor = line_count.max(1) as f32;
    ProfileSummary {
        line_count,
        avg_total_length: sum_length / divisor,
        avg_turn_count: sum_turns / divisor,
        avg_adjacency_ratio: sum_adjacency / divisor,
        top_keys: key_freq
            .top(consts::TOP_KEYS)
            .into_iter()
            .map(|(key, count)| KeyCount { key, count })
            .collect(),
        top_bigrams: bigram_freq
            .top(consts::TOP_BIGRAMS)
            .into_iter()
            .map(|(gram, count)| BigramCount { gram, count })
            .collect(),
        affixes: AFFIX_RULES
            .iter()
            .zip(affix_counts)
            .map(|((pattern, _), count)| AffixTally {
                pattern: *pattern,
                count,
            })
            .collect(),
        zones: zone_bias(&all_points),
        used_keys: used_keys.into_iter().collect(),
    }
}

fn zone_bias(points: &[Point]) -> ZoneBias {
    if points.is_empty() {
        return ZoneBias::default();
    }

    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let mid_x = (min_x + max_x) / 2.0;
    let third = (max_y - min_y) / 3.0;
    let t1 = min_y + third;
    let t2 = min_y + 2.0 * third;

    let mut zones = ZoneBias::default();
    for p in points {
        if p.x < mid_x {
            zones.left += 1.0;
        } else {
            zones.right += 1.0;
        }
        if p.y < t1 {
            zones.top += 1.0;
        } else if p.y < t2 {
            zones.middle += 1.0;
        } else {
            zones.bottom += 1.0;
        }
    }

    let n = points.len() as f32;
    zones.left /= n;
    zones.right /= n;
    zones.top /= n;
    zones.middle /= n;
    zones.bottom /= n;
    zones
}

fn trailing_digit_run(line: &str) -> String {
    let digits: Vec<char> = line
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.into_iter().rev().collect()
}

fn has_year_suffix(line: &str) -> bool {
    let run = trailing_digit_run(line);
    if !(2..=6).contains(&run.len()) {
        return false;
    }
    run.parse::<u32>()
        .map(|value| (consts::YEAR_MIN..=consts::YEAR_MAX).contains(&value))
        .unwrap_or(false)
}

fn has_digit_suffix(line: &str) -> bool {
    line.chars().last().is_some_and(|c| c.is_ascii_digit())
}

fn has_punct_suffix(line: &str) -> bool {
    line.chars().last().is_some_and(|c| c.is_ascii_punctuation())
}

fn has_capitalized_prefix(line: &str) -> bool {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => {
            first.is_alphabetic() && first.is_uppercase() && second.is_lowercase()
        }
        _ => false,
    }
}

fn has_upper_prefix(line: &str) -> bool {
    let run: Vec<char> = line.chars().take_while(|c| c.is_alphabetic()).collect();
    run.len() >= 2 && run.iter().all(|c| c.is_uppercase())
}

fn has_lower_prefix(line: &str) -> bool {
    let run: Vec<char> = line.chars().take_while(|c| c.is_alphabetic()).collect();
    !run.is_empty() && run.iter().all(|c| c.is_lowercase())
}

fn is_word_digit_punct(line: &str) -> bool {
    let mut chars = line.chars().peekable();

    let mut letters = 0usize;
    while chars.peek().is_some_and(|c| c.is_alphabetic()) {
        chars.next();
        letters += 1;
    }
    let mut digits = 0usize;
    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
        chars.next();
        digits += 1;
    }
    while chars.peek().is_some_and(|c| c.is_ascii_punctuation()) {
        chars.next();
    }

    letters > 0 && digits > 0 && chars.next().is_none()
}
