//! Overlong function detection.
//!
//! A function's span runs from one function-start line to the next. The
//! last function in a file has no closing start line and is never measured.

use super::display_path;
use crate::types::{Category, Finding, ScoreResult, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const MAX_FUNCTION_LINES: usize = 50;
pub const LONG_FUNCTION_DEDUCTION: u32 = 3;

static FUNCTION_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(def |func |fn |function |public |private |protected )")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static FUNCTION_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:def|func|fn|function)\s+(\w+)").unwrap_or_else(|_| panic!("Invalid Regex"))
});

struct OpenSpan {
    start: usize,
    name: String,
}

pub fn check(path: &Path, lines: &[&str], result: &mut ScoreResult) {
    let mut open: Option<OpenSpan> = None;

    for (idx, line) in lines.iter().enumerate() {
        if !FUNCTION_START_RE.is_match(line) {
            continue;
        }

        if let Some(span) = open.take() {
            let length = idx - span.start;
            if length > MAX_FUNCTION_LINES {
                result.add_finding(
                    Finding::new(
                        Severity::Major,
                        Category::Complexity,
                        format!(
                            "Function '{}' is {length} lines (max recommended: {MAX_FUNCTION_LINES})",
                            span.name
                        ),
                        LONG_FUNCTION_DEDUCTION,
                    )
                    .at(display_path(path), span.start + 1),
                );
            }
        }

        open = Some(OpenSpan {
            start: idx,
            name: function_name(line),
        });
    }
}

/// Best-effort name after a definition keyword; `unknown` otherwise.
#[must_use]
pub fn function_name(line: &str) -> String {
    FUNCTION_NAME_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map_or_else(|| "unknown".to_string(), |m| m.as_str().to_string())
}
