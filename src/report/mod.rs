pub mod json;
pub mod text;
pub mod types;

use anyhow::Result;
use types::ConversionReport;

/// Render a conversion report in `format` (`json` or `text`)
pub fn generate_report(report: &ConversionReport, format: &str) -> Result<String> {
    match format {
        "json" => json::generate(report),
        "text" => Ok(text::generate(report)),
        _ => anyhow::bail!("Unknown format: {}", format),
    }
}
