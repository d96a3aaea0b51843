use std::io::{self, Write};

use itertools::Itertools;
use thiserror::Error;

use crate::{args::OutputFormat, model::structures::band_stats::RatingReport};

const INDEX_NAME: &str = "rating_band";
// Per-band `total_plays` is left to the JSON output
const COLUMNS: [&str; 5] = ["count", "mean_rating", "std_rating", "nm_plays", "percentage"];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error)
}

pub fn write_report<W: Write>(out: &mut W, report: &RatingReport, format: OutputFormat) -> Result<(), ReportError> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", render_table(report))?;
            writeln!(out)?;
            writeln!(out, "{}", render_summary(report))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn format_float(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Renders the per-band table: a column header line, an index header line,
/// then one right-aligned row per band.
pub fn render_table(report: &RatingReport) -> String {
    let rows: Vec<(String, [String; 5])> = report
        .bands
        .iter()
        .map(|b| {
            (
                b.band.to_string(),
                [
                    b.count.to_string(),
                    format_float(b.mean_rating, 1),
                    format_float(b.std_rating, 1),
                    b.nm_plays.to_string(),
                    format_float(b.percentage, 2)
                ]
            )
        })
        .collect();

    let index_width = rows.iter().map(|(label, _)| label.len()).chain([INDEX_NAME.len()]).max().unwrap_or(0);
    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, name)| rows.iter().map(|(_, cells)| cells[i].len()).chain([name.len()]).max().unwrap_or(0))
        .collect();

    let header = format!(
        "{:index_width$}  {}",
        "",
        COLUMNS.iter().zip(&widths).map(|(name, w)| format!("{:>w$}", name, w = *w)).join("  ")
    );
    let index_header = format!("{:index_width$}", INDEX_NAME);

    let body = rows.iter().map(|(label, cells)| {
        format!(
            "{:index_width$}  {}",
            label,
            cells.iter().zip(&widths).map(|(cell, w)| format!("{:>w$}", cell, w = *w)).join("  ")
        )
    });

    [header.trim_end().to_string(), index_header]
        .into_iter()
        .chain(body)
        .join("\n")
}

fn format_summary_value(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.0}", value)
    }
}

pub fn render_summary(report: &RatingReport) -> String {
    let summary = &report.summary;

    format!(
        "Total puzzles: {}\nMean rating: {}\nMedian rating: {}\nTotal plays: {}",
        summary.total_puzzles,
        format_summary_value(summary.mean_rating),
        format_summary_value(summary.median_rating),
        format_summary_value(summary.total_plays)
    )
}
