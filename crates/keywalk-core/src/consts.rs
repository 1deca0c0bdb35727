/// Canvas offset of the first key in a row block, in px.
pub const PAD_X: f32 = 20.0;
pub const PAD_Y: f32 = 20.0;

/// Horizontal pitch between neighbouring columns, in px.
pub const COL_GAP: f32 = 48.0;

/// Vertical pitch between neighbouring rows, in px.
pub const ROW_GAP: f32 = 34.0;

/// Horizontal stagger per visual row, in key widths. Row 0 is the digit row.
/// Letter blocks of 3-row layouts occupy visual rows 1..=3.
pub const ROW_STAGGER: [f32; 4] = [0.0, 0.5, 1.0, 0.5];

/// Two consecutive points within both deltas count as a key-adjacent step.
/// Tuned so that same-row neighbours (one COL_GAP apart) and same-column
/// neighbours (one ROW_GAP apart) qualify, but skips of two keys do not.
pub const ADJ_DX: f32 = 60.0;
pub const ADJ_DY: f32 = 36.0;

/// Direction change (radians) above which a consecutive triple is a turn.
pub const TURN_THRESHOLD: f32 = 0.6;

/// Number of compass sectors for direction entropy. Entropy is therefore
/// bounded by log2(DIRECTION_BINS) = 3 bits.
pub const DIRECTION_BINS: usize = 8;

/// Nominal key pitches assumed by the knight-move detector. These describe
/// the on-screen rendering of the original visualizer, not the grid above;
/// the detector keeps them fixed so its tolerance window stays meaningful.
pub const KNIGHT_H_PITCH: f32 = 68.0;
pub const KNIGHT_V_PITCH: f32 = 78.0;
pub const KNIGHT_TOLERANCE: f32 = 12.0;

/// Minimum number of consecutively adjacent points that form a walk.
pub const MIN_WALK_POINTS: usize = 3;

/// Detector thresholds shared with the scorer.
pub const HIGH_ADJACENCY: f32 = 0.70;
pub const LOW_ENTROPY_BITS: f32 = 1.50;
pub const LOW_STEP_CV: f32 = 0.25;

/// Knight ratio at which the informational finding fires.
pub const KNIGHT_INFO_RATIO: f32 = 0.20;

/// Minimum input length (code points) for the straight-line finding.
pub const MIN_STRAIGHT_CHARS: usize = 4;

/// Minimum input length (code points) for the high-adjacency finding.
pub const MIN_HIGH_ADJ_CHARS: usize = 6;

/// N-gram widths scanned for internal repetition.
pub const NGRAM_SIZES: [usize; 3] = [2, 3, 4];

/// How often an n-gram must occur before it is reported as a repeat.
pub const MIN_NGRAM_REPEATS: usize = 3;

/// Default component weights of the dependency score.
pub const W_ADJACENCY: f32 = 0.30;
pub const W_LOW_ENTROPY: f32 = 0.25;
pub const W_STRAIGHT: f32 = 0.20;
pub const W_PATTERN: f32 = 0.15;
pub const W_LOW_CV: f32 = 0.10;

/// Score label cut-offs: `bad` at or above SCORE_BAD, `warning` at or above
/// SCORE_WARNING, `good` below.
pub const SCORE_BAD: u8 = 60;
pub const SCORE_WARNING: u8 = 40;

/// Profile table sizes.
pub const TOP_KEYS: usize = 8;
pub const TOP_BIGRAMS: usize = 5;

/// Inclusive value range a trailing digit run must fall in to count as a
/// year suffix.
pub const YEAR_MIN: u32 = 2010;
pub const YEAR_MAX: u32 = 2025;
