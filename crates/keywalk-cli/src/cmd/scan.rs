use clap::Args;
use keywalk_core::api::{self, AnalysisReport};
use keywalk_core::config::ScoreWeights;
use keywalk_core::patterns::Severity;
use keywalk_core::score::ScoreLabel;
use keywalk_core::util;
use serde::Serialize;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};

use crate::cmd::read_lines;
use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Wordlist file, one candidate per line.
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub weights: ScoreWeights,

    /// How many of the worst candidates to list.
    #[arg(long, default_value_t = 15)]
    pub top: usize,

    /// Print candidates unmasked.
    #[arg(long, default_value_t = false)]
    pub show_plain: bool,

    /// Write every scanned row to a CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Emit every row as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// One scanned candidate, flattened for the ranking table and CSV export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRow {
    pub candidate: String,
    pub score: u8,
    pub label: ScoreLabel,
    pub bad_findings: usize,
    pub top_finding: String,
}

pub fn run(args: ScanArgs, layout: &str, weights: &ScoreWeights) {
    match util::calculate_file_hash(&args.input) {
        Ok(hash) => info!(
            "🔎 Scanning {} (sha256 {})",
            args.input.display(),
            &hash[..12]
        ),
        Err(e) => {
            error!("Cannot read {}: {}", args.input.display(), e);
            process::exit(1);
        }
    }

    let lines: Vec<String> = read_lines(Some(&args.input))
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    let analyses = api::analyze_batch(&lines, layout, weights);
    let rows: Vec<ScanRow> = lines
        .iter()
        .zip(&analyses)
        .map(|(line, report)| to_row(line, report, args.show_plain))
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
        return;
    }

    let good = rows.iter().filter(|r| r.label == ScoreLabel::Good).count();
    let warning = rows
        .iter()
        .filter(|r| r.label == ScoreLabel::Warning)
        .count();
    let bad = rows.iter().filter(|r| r.label == ScoreLabel::Bad).count();

    println!("\n🚨 === WORDLIST SCAN ({} candidates) === 🚨", rows.len());
    reports::print_scan_summary(rows.len(), good, warning, bad);

    // Stable sort, so equal scores keep wordlist order.
    let mut ranked = rows.clone();
    ranked.sort_by_key(|row| Reverse(row.score));
    ranked.truncate(args.top);
    reports::print_scan_rows(&ranked);

    if let Some(path) = &args.export {
        if let Err(e) = export_csv(path, &rows) {
            error!("CSV export failed: {}", e);
            process::exit(1);
        }
        info!("📦 Exported {} rows to {}", rows.len(), path.display());
    }
}

fn to_row(line: &str, report: &AnalysisReport, show_plain: bool) -> ScanRow {
    let candidate = if show_plain {
        line.to_string()
    } else {
        util::mask_secret(line)
    };
    let bad_findings = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Bad)
        .count();
    let top_finding = report
        .findings
        .first()
        .map(reports::finding_label)
        .unwrap_or_else(|| "-".to_string());

    ScanRow {
        candidate,
        score: report.score.value,
        label: report.score.label,
        bad_findings,
        top_finding,
    }
}

fn export_csv(path: &Path, rows: &[ScanRow]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
