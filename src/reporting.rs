//! Rendering of a finished [`ScoreResult`].
//!
//! Reporters only format; every decision (score, gate, exit code) is made
//! by the result itself.

mod console;
mod json;

pub use console::{format_summary, format_verbose};
pub use json::{format_json, JsonReport};

use crate::types::{Gate, ScoreResult};
use anyhow::Result;

/// Which rendering to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Summary line, plus the breakdown when the commit gate is missed.
    Auto,
    Summary,
    Verbose,
    Json,
}

impl OutputMode {
    /// Resolves CLI flags; JSON wins over summary, summary over verbose.
    #[must_use]
    pub fn from_flags(json: bool, summary: bool, verbose: bool) -> Self {
        if json {
            Self::Json
        } else if summary {
            Self::Summary
        } else if verbose {
            Self::Verbose
        } else {
            Self::Auto
        }
    }
}

/// Renders `result` in the requested mode.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(result: &ScoreResult, mode: OutputMode) -> Result<String> {
    Ok(match mode {
        OutputMode::Json => format_json(result)?,
        OutputMode::Summary => format_summary(result),
        OutputMode::Verbose => format_verbose(result),
        OutputMode::Auto => {
            let mut out = format_summary(result);
            if !result.passes(Gate::Commit) {
                out.push_str("\n\n");
                out.push_str(&format_verbose(result));
            }
            out
        }
    })
}

/// Prints the rendered report to stdout.
///
/// # Errors
/// Returns error if rendering fails.
pub fn print_report(result: &ScoreResult, mode: OutputMode) -> Result<()> {
    println!("{}", render(result, mode)?);
    Ok(())
}
