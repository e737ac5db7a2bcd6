use super::types::ConversionReport;
use crate::rules::HeaderPlacement;
use colored::Colorize;
use std::fmt::Write;

/// Render a report as a coloured, human-readable summary
pub fn generate(report: &ConversionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} Converted to {}",
        "■".blue().bold(),
        report.target.label().cyan()
    );
    if !report.changed {
        let _ = writeln!(out, "  {}", "No Selenium idioms recognised; text unchanged".yellow());
        return out;
    }

    let header = match report.header {
        HeaderPlacement::Replaced => "in place of the first Selenium import",
        HeaderPlacement::Top => "at the top",
        HeaderPlacement::Omitted => "not inserted",
    };
    let _ = writeln!(out, "  Imports: {}", header);
    let _ = writeln!(
        out,
        "  {} rewrites by {} rules",
        report.rewrites().to_string().green(),
        report.hits.len().to_string().green()
    );
    for hit in &report.hits {
        let _ = writeln!(
            out,
            "    {:<10} {} ×{}",
            format!("{:?}", hit.category).dimmed(),
            hit.rule,
            hit.count
        );
    }
    out
}
