use crate::rules::{HeaderPlacement, RuleHit};
use crate::syntax::Syntax;
use serde::Serialize;

/// What one conversion did to its input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub target: Syntax,
    pub header: HeaderPlacement,
    /// Whether the output differs from the input
    pub changed: bool,
    /// Rules that fired, in application order
    pub hits: Vec<RuleHit>,
}

impl ConversionReport {
    /// Total rewrites across all rules
    pub fn rewrites(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}
