use clap::Args;
use keywalk_core::api;
use keywalk_core::config::ScoreWeights;
use std::process;
use tracing::error;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Candidate string to analyze.
    pub text: String,

    #[command(flatten)]
    pub weights: ScoreWeights,

    /// Emit the full report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, layout: &str, weights: &ScoreWeights) {
    let report = api::analyze_single(&args.text, layout, weights);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("\n🔎 === CANDIDATE ANALYSIS ({}) === 🔎", report.layout);
    reports::print_metrics(&report.metrics);
    reports::print_findings(&report.findings);
    reports::print_score(&report.score);
}
