use std::fs;
use std::path::Path;

use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::{KeywalkError, KwResult};

/// Component weights of the dependency score. Defaults sum to 1.0 so the raw
/// composite stays in [0, 1]; other sums are allowed and simply rescale the
/// score before clamping.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the normalized adjacency component.
    #[arg(long, default_value_t = consts::W_ADJACENCY)]
    pub w_adjacency: f32,

    /// Weight of the low-direction-entropy component.
    #[arg(long, default_value_t = consts::W_LOW_ENTROPY)]
    pub w_low_entropy: f32,

    /// Weight of the straight-line flag.
    #[arg(long, default_value_t = consts::W_STRAIGHT)]
    pub w_straight: f32,

    /// Weight of the detected-pattern flag.
    #[arg(long, default_value_t = consts::W_PATTERN)]
    pub w_pattern: f32,

    /// Weight of the low-step-variation component.
    #[arg(long, default_value_t = consts::W_LOW_CV)]
    pub w_low_cv: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            w_adjacency: consts::W_ADJACENCY,
            w_low_entropy: consts::W_LOW_ENTROPY,
            w_straight: consts::W_STRAIGHT,
            w_pattern: consts::W_PATTERN,
            w_low_cv: consts::W_LOW_CV,
        }
    }
}

impl ScoreWeights {
    /// Loads weights from a JSON file. Missing fields keep their defaults,
    /// so partial override files work.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KwResult<Self> {
        let content = fs::read_to_string(path)?;
        let weights = serde_json::from_str(&content)?;
        Ok(weights)
    }

    /// Overlays the weights that were explicitly passed on the command line
    /// onto `self`, leaving file-loaded or default values alone otherwise.
    pub fn merge_from_cli(&mut self, cli: &ScoreWeights, matches: &ArgMatches) {
        let from_cli = |id: &str| matches.value_source(id) == Some(ValueSource::CommandLine);

        if from_cli("w_adjacency") {
            self.w_adjacency = cli.w_adjacency;
        }
        if from_cli("w_low_entropy") {
            self.w_low_entropy = cli.w_low_entropy;
        }
        if from_cli("w_straight") {
            self.w_straight = cli.w_straight;
        }
        if from_cli("w_pattern") {
            self.w_pattern = cli.w_pattern;
        }
        if from_cli("w_low_cv") {
            self.w_low_cv = cli.w_low_cv;
        }
    }

    pub fn validate(&self) -> KwResult<()> {
        let all = [
            self.w_adjacency,
            self.w_low_entropy,
            self.w_straight,
            self.w_pattern,
            self.w_low_cv,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(KeywalkError::Validation(
                "score weights must be finite and non-negative".to_string(),
            ));
        }
        if all.iter().sum::<f32>() <= 0.0 {
            return Err(KeywalkError::Validation(
                "at least one score weight must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
