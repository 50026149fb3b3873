//! Machine-readable output.

use crate::types::{Finding, Gate, ScoreResult};
use serde::Serialize;

/// Serialized shape of a finished run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub score: u32,
    pub gate: Gate,
    pub auto_fail: bool,
    pub auto_fail_reason: &'a str,
    pub findings: &'a [Finding],
    pub summary: JsonSummary,
}

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub total_deductions: u64,
    pub bonus: i32,
}

impl<'a> From<&'a ScoreResult> for JsonReport<'a> {
    fn from(result: &'a ScoreResult) -> Self {
        Self {
            score: result.score(),
            gate: result.gate(),
            auto_fail: result.auto_fail(),
            auto_fail_reason: result.auto_fail_reason(),
            findings: result.findings(),
            summary: JsonSummary {
                critical: result.critical_count(),
                major: result.major_count(),
                minor: result.minor_count(),
                total_deductions: result.total_deductions(),
                bonus: result.bonus(),
            },
        }
    }
}

/// Pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json(result: &ScoreResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::from(result))
}
