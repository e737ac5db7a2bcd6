use super::types::ConversionReport;
use anyhow::Result;

/// Render a report as pretty-printed JSON
pub fn generate(report: &ConversionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
