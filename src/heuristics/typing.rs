//! Untyped escape hatches, keyed by file extension.

use super::display_path;
use crate::types::{Category, Finding, ScoreResult, Severity};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const ESCAPE_HATCH_DEDUCTION: u32 = 2;

pub struct EscapeHatch {
    regex: Regex,
    /// Suffix with leading dot; empty applies to every file.
    extension: &'static str,
    message: &'static str,
}

impl EscapeHatch {
    #[must_use]
    pub fn applies_to(&self, suffix: &str) -> bool {
        self.extension.is_empty() || self.extension == suffix
    }
}

static ESCAPE_HATCHES: LazyLock<Vec<EscapeHatch>> = LazyLock::new(|| {
    [
        (r"\bany\b", ".ts", "Use of 'any' type"),
        (r"\binterface\s*\{\s*\}", ".go", "Use of empty interface{}"),
        (r"# type:\s*ignore", ".py", "Type ignore comment"),
        (r"@ts-ignore|@ts-expect-error", ".ts", "TypeScript type suppression"),
    ]
    .into_iter()
    .map(|(pattern, extension, message)| EscapeHatch {
        regex: Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid Regex")),
        extension,
        message,
    })
    .collect()
});

/// `.ts` for `a/b.ts`; empty for files without an extension.
fn suffix(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

pub fn check(path: &Path, lines: &[&str], result: &mut ScoreResult) {
    check_with(&ESCAPE_HATCHES, path, lines, result);
}

/// Pattern-major scan: all lines for the first hatch, then the next.
fn check_with(hatches: &[EscapeHatch], path: &Path, lines: &[&str], result: &mut ScoreResult) {
    let suffix = suffix(path);
    for hatch in hatches.iter().filter(|h| h.applies_to(&suffix)) {
        for (idx, line) in lines.iter().enumerate() {
            if hatch.regex.is_match(line) {
                result.add_finding(
                    Finding::new(
                        Severity::Minor,
                        Category::Typing,
                        hatch.message,
                        ESCAPE_HATCH_DEDUCTION,
                    )
                    .at(display_path(path), idx + 1),
                );
            }
        }
    }
}
