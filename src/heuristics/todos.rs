//! Untracked TODO markers.

use super::display_path;
use crate::types::{Category, Finding, ScoreResult, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const TODO_DEDUCTION: u32 = 1;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TODO|FIXME|HACK|XXX").unwrap_or_else(|_| panic!("Invalid Regex")));
/// `#123` or `JIRA-456`.
static TICKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+|[A-Z]+-\d+").unwrap_or_else(|_| panic!("Invalid Regex")));

pub fn check(path: &Path, lines: &[&str], result: &mut ScoreResult) {
    for (idx, line) in lines.iter().enumerate() {
        if MARKER_RE.is_match(line) && !TICKET_RE.is_match(line) {
            result.add_finding(
                Finding::new(
                    Severity::Minor,
                    Category::Maintenance,
                    "TODO/FIXME without ticket reference",
                    TODO_DEDUCTION,
                )
                .at(display_path(path), idx + 1),
            );
        }
    }
}
