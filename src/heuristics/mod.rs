//! Line-oriented source heuristics.
//!
//! None of these parse the language; they are regex scans over raw lines
//! and are deliberately approximate. Every sub-check runs over every file.

pub mod function_length;
pub mod secrets;
pub mod todos;
pub mod typing;

use crate::text;
use crate::types::ScoreResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Runs every sub-check over each file in order.
pub fn check_source_files(files: &[impl AsRef<Path>], result: &mut ScoreResult) {
    for file in files {
        check_file(file.as_ref(), result);
    }
}

/// Reads one file (lossy UTF-8) and runs the sub-checks on it. Unreadable
/// files are skipped without a finding.
pub fn check_file(path: &Path, result: &mut ScoreResult) {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            return;
        }
    };
    let content = String::from_utf8_lossy(&bytes);
    let lines = text::split_lines(&content);
    check_lines(path, &lines, result);
}

/// Runs the sub-checks over already-split lines.
pub fn check_lines(path: &Path, lines: &[&str], result: &mut ScoreResult) {
    function_length::check(path, lines, result);
    secrets::check(path, lines, result);
    todos::check(path, lines, result);
    typing::check(path, lines, result);
}

/// Path as it appears in findings.
pub(crate) fn display_path(path: &Path) -> String {
    path.display().to_string()
}
