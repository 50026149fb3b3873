use super::TERMINAL_DEDUCTION;
use crate::types::{Category, CommandResult, Finding, ScoreResult, Severity};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub const TESTS_FAILED: &str = "Tests failed";

/// Characters of tool output kept in the failure message.
pub const MAX_FAILURE_EXCERPT: usize = 500;

static PASS_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+pass").unwrap_or_else(|_| panic!("Invalid Regex")));
static DECIMAL_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").unwrap_or_else(|_| panic!("Invalid Regex")));
static FAIL_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+fail").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Scores the test phase.
///
/// A non-zero exit auto-fails. A zero exit still auto-fails when the output
/// reports a non-zero failure count (`"3 failed"`, `"1 FAIL"`, ...); output
/// with no recognizable count is taken at face value.
pub fn check_tests(outcome: &CommandResult, result: &mut ScoreResult) {
    let output = outcome.output();

    if !outcome.passed() {
        let excerpt: String = output.chars().take(MAX_FAILURE_EXCERPT).collect();
        result.trigger_auto_fail(TESTS_FAILED);
        result.add_finding(Finding::new(
            Severity::Critical,
            Category::Tests,
            format!("Test suite failed: {excerpt}"),
            TERMINAL_DEDUCTION,
        ));
        return;
    }

    let passed = extract_count(&output, &PASS_COUNT_RE);
    let failed = extract_count(&output, &FAIL_COUNT_RE);
    debug!(?passed, ?failed, "parsed test counts");

    if let Some(failed) = failed.filter(|&n| n > 0) {
        let message = format!("{failed} tests failing");
        result.add_finding(Finding::new(
            Severity::Critical,
            Category::Tests,
            message.clone(),
            TERMINAL_DEDUCTION,
        ));
        result.trigger_auto_fail(message);
    }
}

/// First capture of `pattern` parsed as a count. Only the first match counts.
///
/// Any Unicode decimal digit is accepted and counts too large for `u64`
/// saturate, so a non-zero run of digits never reads as zero.
#[must_use]
pub fn extract_count(text: &str, pattern: &Regex) -> Option<u64> {
    let digits = pattern.captures(text)?.get(1)?.as_str();
    digits.chars().try_fold(0u64, |acc, c| {
        let digit = decimal_value(c)?;
        Some(acc.saturating_mul(10).saturating_add(u64::from(digit)))
    })
}

/// Value of a Unicode decimal digit. Decimal digits come in contiguous
/// runs of whole zero-to-nine sets, so the offset from the start of the
/// run gives the value.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal(c) {
        return None;
    }
    let code = u32::from(c);
    let mut first = code;
    while let Some(prev) = first.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        first -= 1;
    }
    Some((code - first) % 10)
}

fn is_decimal(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::outcome;

    #[test]
    fn clean_run_adds_nothing() {
        let mut r = ScoreResult::new();
        check_tests(&outcome(0, "===== 42 passed in 1.2s ====="), &mut r);
        assert!(r.findings().is_empty());
        assert!(!r.auto_fail());
    }

    #[test]
    fn nonzero_exit_auto_fails() {
        let mut r = ScoreResult::new();
        check_tests(&outcome(1, "FAILED tests/test_a.py::test_x"), &mut r);
        assert!(r.auto_fail());
        assert_eq!(r.auto_fail_reason(), "Tests failed");
        assert_eq!(r.findings().len(), 1);
        assert!(r.findings()[0]
            .message()
            .starts_with("Test suite failed: FAILED tests/test_a.py"));
        assert_eq!(r.findings()[0].deduction(), 100);
    }

    #[test]
    fn failure_message_is_truncated() {
        let long = "x".repeat(2000);
        let mut r = ScoreResult::new();
        check_tests(&outcome(1, &long), &mut r);
        let msg = r.findings()[0].message();
        assert_eq!(msg.len(), "Test suite failed: ".len() + MAX_FAILURE_EXCERPT);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "é".repeat(600);
        let mut r = ScoreResult::new();
        check_tests(&outcome(1, &long), &mut r);
        let msg = r.findings()[0].message();
        assert_eq!(msg.chars().count(), "Test suite failed: ".len() + MAX_FAILURE_EXCERPT);
    }

    #[test]
    fn zero_exit_with_failures_still_auto_fails() {
        let mut r = ScoreResult::new();
        check_tests(&outcome(0, "Tests: 10 passed, 2 failed"), &mut r);
        assert!(r.auto_fail());
        assert_eq!(r.auto_fail_reason(), "2 tests failing");
        assert_eq!(r.findings()[0].message(), "2 tests failing");
        assert_eq!(r.findings()[0].severity(), Severity::Critical);
    }

    #[test]
    fn zero_failures_reported_is_fine() {
        let mut r = ScoreResult::new();
        check_tests(&outcome(0, "10 passed, 0 failed"), &mut r);
        assert!(!r.auto_fail());
    }

    #[test]
    fn only_first_fail_match_counts() {
        let mut r = ScoreResult::new();
        check_tests(&outcome(0, "0 failures so far\n7 failed"), &mut r);
        assert!(!r.auto_fail());
    }

    #[test]
    fn count_match_is_case_insensitive() {
        assert_eq!(extract_count("3 FAILED", &FAIL_COUNT_RE), Some(3));
        assert_eq!(extract_count("12 Passed", &PASS_COUNT_RE), Some(12));
    }

    #[test]
    fn oversized_failure_count_still_auto_fails() {
        let mut r = ScoreResult::new();
        check_tests(&outcome(0, "99999999999999999999 failed"), &mut r);
        assert!(r.auto_fail());
        assert_eq!(
            extract_count("99999999999999999999 failed", &FAIL_COUNT_RE),
            Some(u64::MAX)
        );
    }

    #[test]
    fn non_ascii_digits_are_counted() {
        assert_eq!(extract_count("\u{663} failed", &FAIL_COUNT_RE), Some(3));
        assert_eq!(extract_count("\u{660}\u{660} failed", &FAIL_COUNT_RE), Some(0));
        assert_eq!(extract_count("\u{967}\u{968} passed", &PASS_COUNT_RE), Some(12));

        let mut r = ScoreResult::new();
        check_tests(&outcome(0, "\u{662} failed"), &mut r);
        assert!(r.auto_fail());
        assert_eq!(r.auto_fail_reason(), "2 tests failing");
    }

    #[test]
    fn missing_counts_are_not_errors() {
        assert_eq!(extract_count("ok  \tgithub.com/x/y\t0.01s", &FAIL_COUNT_RE), None);
        let mut r = ScoreResult::new();
        check_tests(&outcome(0, "ok"), &mut r);
        assert!(r.findings().is_empty());
    }

    #[test]
    fn idempotent_on_same_input() {
        let o = outcome(0, "1 passed, 4 failed");
        let mut a = ScoreResult::new();
        let mut b = ScoreResult::new();
        check_tests(&o, &mut a);
        check_tests(&o, &mut b);
        assert_eq!(a.findings(), b.findings());
    }
}
