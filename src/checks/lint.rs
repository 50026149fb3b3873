use super::is_runner_line;
use crate::text;
use crate::types::{Category, CommandResult, Finding, ScoreResult, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// Per-class cap on findings from a single lint run.
pub const MAX_LINT_FINDINGS: usize = 10;
pub const LINT_ERROR_DEDUCTION: u32 = 5;
pub const LINT_WARNING_DEDUCTION: u32 = 1;

static ERROR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)error").unwrap_or_else(|_| panic!("Invalid Regex")));
static WARNING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)warning|warn").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Scores a failing lint run line by line.
///
/// Error and warning lines are scanned independently, so a line mentioning
/// both is counted twice. A zero exit is trusted regardless of output.
pub fn check_lint(outcome: &CommandResult, result: &mut ScoreResult) {
    if outcome.passed() {
        return;
    }

    let output = outcome.output();

    let lines = text::split_lines(&output);

    let errors = lines
        .iter()
        .filter(|line| ERROR_RE.is_match(line) && !is_runner_line(line))
        .take(MAX_LINT_FINDINGS);
    for line in errors {
        result.add_finding(Finding::new(
            Severity::Major,
            Category::Lint,
            line.trim(),
            LINT_ERROR_DEDUCTION,
        ));
    }

    let warnings = lines
        .iter()
        .filter(|line| WARNING_RE.is_match(line))
        .take(MAX_LINT_FINDINGS);
    for line in warnings {
        result.add_finding(Finding::new(
            Severity::Minor,
            Category::Lint,
            line.trim(),
            LINT_WARNING_DEDUCTION,
        ));
    }
}
