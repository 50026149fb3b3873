use super::is_runner_line;
use crate::text;
use crate::types::{Category, CommandResult, Finding, ScoreResult, Severity};
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

/// Output markers meaning the project has no type-check step wired up.
pub const NOT_CONFIGURED_MARKERS: [&str; 2] = ["PLACEHOLDER", "No rule"];
pub const MAX_TYPECHECK_FINDINGS: usize = 5;
pub const TYPECHECK_DEDUCTION: u32 = 20;

static ERROR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)error").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Scores a type-check run. Each error line costs more than a lint error;
/// the line text itself is not kept.
pub fn check_typecheck(outcome: &CommandResult, result: &mut ScoreResult) {
    let output = outcome.output();

    if NOT_CONFIGURED_MARKERS.iter().any(|m| output.contains(m)) {
        info!("type checking not configured for this project, skipping");
        return;
    }
    if outcome.passed() {
        return;
    }

    let errors = text::split_lines(&output)
        .into_iter()
        .filter(|line| ERROR_RE.is_match(line) && !is_runner_line(line))
        .count();

    for _ in 0..errors.min(MAX_TYPECHECK_FINDINGS) {
        result.add_finding(Finding::new(
            Severity::Major,
            Category::Typecheck,
            "Type check error",
            TYPECHECK_DEDUCTION,
        ));
    }
}
