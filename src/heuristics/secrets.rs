//! Hardcoded credential detection.
//!
//! The only source heuristic that can latch auto-fail. Scanning continues
//! after a hit so every leak gets reported.

use super::display_path;
use crate::types::{Category, Finding, ScoreResult, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const SECRET_DEDUCTION: u32 = 25;
pub const SECRETS_DETECTED: &str = "Hardcoded secrets detected";

/// Trimmed-line prefixes treated as comments.
const COMMENT_PREFIXES: [&str; 4] = ["#", "//", "*", "/*"];
/// Path fragments (case-insensitive) that exempt a file from the scan.
const EXEMPT_PATH_MARKERS: [&str; 2] = ["test", "mock"];

struct SecretPattern {
    regex: Regex,
    message: &'static str,
}

static SECRET_PATTERNS: LazyLock<Vec<SecretPattern>> = LazyLock::new(|| {
    [
        (
            r#"(?i)(?:password|passwd|pwd)\s*=\s*["'][^"']+["']"#,
            "Potential hardcoded password",
        ),
        (
            r#"(?i)(?:api_key|apikey|api_secret)\s*=\s*["'][^"']+["']"#,
            "Potential hardcoded API key",
        ),
        (
            r#"(?i)(?:secret|token)\s*=\s*["'][A-Za-z0-9+/=]{20,}["']"#,
            "Potential hardcoded secret/token",
        ),
        (
            r#"(?i)(?:AWS_SECRET|aws_secret)\s*=\s*["'][^"']+["']"#,
            "Potential hardcoded AWS secret",
        ),
    ]
    .into_iter()
    .map(|(pattern, message)| SecretPattern {
        regex: Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid Regex")),
        message,
    })
    .collect()
});

pub fn check(path: &Path, lines: &[&str], result: &mut ScoreResult) {
    if is_exempt(path) {
        return;
    }

    for (idx, line) in lines.iter().enumerate() {
        if is_comment(line) {
            continue;
        }
        for pattern in SECRET_PATTERNS.iter() {
            if pattern.regex.is_match(line) {
                result.trigger_auto_fail(SECRETS_DETECTED);
                result.add_finding(
                    Finding::new(
                        Severity::Critical,
                        Category::Security,
                        pattern.message,
                        SECRET_DEDUCTION,
                    )
                    .at(display_path(path), idx + 1),
                );
            }
        }
    }
}

fn is_exempt(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    EXEMPT_PATH_MARKERS.iter().any(|m| lower.contains(m))
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p))
}
