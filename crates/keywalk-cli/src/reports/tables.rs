use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keywalk_core::metrics::MetricSet;
use keywalk_core::patterns::{Finding, Severity};
use keywalk_core::profile::ProfileSummary;
use keywalk_core::score::{DependencyScore, ScoreLabel};

use crate::cmd::scan::ScanRow;

pub fn metrics(m: &MetricSet) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![
        Cell::new("Unique keys"),
        Cell::new(m.unique_count.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Path length (px)"),
        Cell::new(format!("{:.1}", m.total_length)),
    ]);
    table.add_row(vec![Cell::new("Turns"), Cell::new(m.turn_count.to_string())]);
    table.add_row(vec![
        Cell::new("Adjacency ratio"),
        Cell::new(format!("{:.2}", m.adjacency_ratio)),
    ]);
    table.add_row(vec![
        Cell::new("Direction entropy (bits)"),
        Cell::new(format!("{:.2}", m.direction_entropy)),
    ]);
    table.add_row(vec![
        Cell::new("Step CV"),
        Cell::new(format!("{:.2}", m.step_cv)),
    ]);
    table.add_row(vec![
        Cell::new("Knight ratio"),
        Cell::new(format!("{:.2}", m.knight_ratio)),
    ]);

    println!("\n{}", table);
}

pub fn findings(findings: &[Finding]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Severity").add_attribute(Attribute::Bold),
        Cell::new("Finding").add_attribute(Attribute::Bold),
    ]);

    for finding in findings {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(super::finding_label(finding)),
        ]);
    }

    println!("\n{}", table);
}

pub fn score(score: &DependencyScore) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Dependency score").add_attribute(Attribute::Bold),
        Cell::new(score.value.to_string()).add_attribute(Attribute::Bold),
        label_cell(score.label),
    ]);

    println!("\n{}", table);
}

pub fn profile(summary: &ProfileSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Lines").add_attribute(Attribute::Bold),
        Cell::new("Avg length (px)"),
        Cell::new("Avg turns"),
        Cell::new("Avg adjacency"),
        Cell::new("Distinct keys"),
    ]);

    for i in 0..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new(summary.line_count.to_string()),
        Cell::new(format!("{:.1}", summary.avg_total_length)),
        Cell::new(format!("{:.2}", summary.avg_turn_count)),
        Cell::new(format!("{:.2}", summary.avg_adjacency_ratio)),
        Cell::new(summary.used_keys.len().to_string()),
    ]);
    println!("\n{}", table);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Top keys").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Top bigrams").add_attribute(Attribute::Bold),
        Cell::new("Count"),
    ]);

    for i in [1, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let rows = summary.top_keys.len().max(summary.top_bigrams.len());
    for i in 0..rows {
        let (key, key_count) = summary
            .top_keys
            .get(i)
            .map(|k| (k.key.to_string(), k.count.to_string()))
            .unwrap_or_default();
        let (gram, gram_count) = summary
            .top_bigrams
            .get(i)
            .map(|b| (b.gram.clone(), b.count.to_string()))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(key),
            Cell::new(key_count),
            Cell::new(gram),
            Cell::new(gram_count),
        ]);
    }
    println!("\n{}", table);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Affix habit").add_attribute(Attribute::Bold),
        Cell::new("Lines"),
        Cell::new("Share"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let share_cell = |count: usize| -> Cell {
        let pct = (count as f32 / summary.line_count.max(1) as f32) * 100.0;
        let text = format!("{:.0}%", pct);
        if pct >= 50.0 {
            Cell::new(text).fg(Color::Red)
        } else if pct >= 20.0 {
            Cell::new(text).fg(Color::Yellow)
        } else {
            Cell::new(text)
        }
    };

    for tally in &summary.affixes {
        table.add_row(vec![
            Cell::new(tally.pattern.to_string()),
            Cell::new(tally.count.to_string()),
            share_cell(tally.count),
        ]);
    }
    println!("\n{}", table);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Zone").add_attribute(Attribute::Bold),
        Cell::new("Left"),
        Cell::new("Right"),
        Cell::new("Top"),
        Cell::new("Middle"),
        Cell::new("Bottom"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new("Presses"),
        Cell::new(format!("{:.0}%", summary.zones.left * 100.0)),
        Cell::new(format!("{:.0}%", summary.zones.right * 100.0)),
        Cell::new(format!("{:.0}%", summary.zones.top * 100.0)),
        Cell::new(format!("{:.0}%", summary.zones.middle * 100.0)),
        Cell::new(format!("{:.0}%", summary.zones.bottom * 100.0)),
    ]);
    println!("\n{}", table);
}

pub fn scan_summary(total: usize, good: usize, warning: usize, bad: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Candidates").add_attribute(Attribute::Bold),
        Cell::new("Good").fg(Color::Green),
        Cell::new("Warning").fg(Color::Yellow),
        Cell::new("Bad").fg(Color::Red),
    ]);

    for i in 0..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new(total.to_string()),
        Cell::new(good.to_string()),
        Cell::new(warning.to_string()),
        Cell::new(bad.to_string()),
    ]);
    println!("\n{}", table);
}

pub fn scan_rows(rows: &[ScanRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Candidate").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Label"),
        Cell::new("Bad findings"),
        Cell::new("Leading finding"),
    ]);

    for i in [0, 2, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new((i + 1).to_string()),
            Cell::new(&row.candidate),
            Cell::new(row.score.to_string()).add_attribute(Attribute::Bold),
            label_cell(row.label),
            Cell::new(row.bad_findings.to_string()),
            Cell::new(&row.top_finding),
        ]);
    }
    println!("\n{}", table);
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.to_string());
    match severity {
        Severity::Bad => cell.fg(Color::Red),
        Severity::Info => cell.fg(Color::Cyan),
        Severity::Good => cell.fg(Color::Green),
    }
}

fn label_cell(label: ScoreLabel) -> Cell {
    let cell = Cell::new(label.to_string());
    match label {
        ScoreLabel::Bad => cell.fg(Color::Red),
        ScoreLabel::Warning => cell.fg(Color::Yellow),
        ScoreLabel::Good => cell.fg(Color::Green),
    }
}
