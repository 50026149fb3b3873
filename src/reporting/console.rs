use crate::types::{Gate, ScoreResult, Severity};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// One-line summary.
#[must_use]
pub fn format_summary(result: &ScoreResult) -> String {
    format!(
        "Quality Score: {}/100 [{}] ({} critical, {} major, {} minor)",
        result.score(),
        gate_label(result.gate()),
        result.critical_count(),
        result.major_count(),
        result.minor_count(),
    )
}

/// Detailed breakdown grouped by severity.
#[must_use]
pub fn format_verbose(result: &ScoreResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Quality Score: {}/100", result.score());
    let _ = writeln!(out, "Gate: {}", gate_label(result.gate()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Findings ({}):", result.findings().len());

    if result.auto_fail() {
        let _ = writeln!(
            out,
            "  {} {}",
            "AUTO-FAIL:".red().bold(),
            result.auto_fail_reason()
        );
        let _ = writeln!(out);
    }

    for severity in Severity::ALL {
        let mut group = result
            .findings()
            .iter()
            .filter(|f| f.severity() == severity)
            .peekable();
        if group.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "  {}", severity_header(severity));
        for f in group {
            let _ = writeln!(
                out,
                "    - [{}] {} (-{})",
                f.location(),
                f.message(),
                f.deduction()
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Quality Gates:");
    let _ = writeln!(out, "  Commit (80):  {}", pass_fail(result.passes(Gate::Commit)));
    let _ = writeln!(out, "  PR (90):      {}", pass_fail(result.passes(Gate::Pr)));
    let _ = write!(out, "  Release (95): {}", pass_fail(result.passes(Gate::Release)));

    out
}

fn gate_label(gate: Gate) -> ColoredString {
    match gate {
        Gate::Release | Gate::Pr => gate.label().green().bold(),
        Gate::Commit => gate.label().yellow().bold(),
        Gate::Blocked | Gate::AutoFail => gate.label().red().bold(),
    }
}

fn severity_header(severity: Severity) -> ColoredString {
    let header = format!("[{}]", severity.label());
    match severity {
        Severity::Critical => header.red().bold(),
        Severity::Major => header.yellow(),
        Severity::Minor => header.normal(),
        Severity::Info => header.dimmed(),
    }
}

fn pass_fail(passed: bool) -> ColoredString {
    if passed {
        "PASS".green()
    } else {
        "FAIL".red()
    }
}
