//! Checkers that turn external command output into findings.
//!
//! Each checker is a pure function of a [`CommandResult`](crate::types::CommandResult); running the
//! command is the phase runner's job.

pub mod build;
pub mod lint;
pub mod test_suite;
pub mod typecheck;

pub use build::check_build;
pub use lint::check_lint;
pub use test_suite::check_tests;
pub use typecheck::check_typecheck;

/// Prefix of the build driver's own chatter (e.g. `make: *** [lint] Error 1`),
/// which must not be counted as a tool diagnostic.
pub const RUNNER_PREFIX: &str = "make";

/// Pass/fail deduction used by the terminal checkers; moot once auto-fail
/// is latched but kept for reporting.
pub const TERMINAL_DEDUCTION: u32 = 100;

pub(crate) fn is_runner_line(line: &str) -> bool {
    line.starts_with(RUNNER_PREFIX)
}

/// Shorthand used by checker tests.
#[cfg(test)]
pub(crate) fn outcome(exit_code: i32, stdout: &str) -> crate::types::CommandResult {
    crate::types::CommandResult::new("make check 2>&1", exit_code, stdout, "", 0)
}
