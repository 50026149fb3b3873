use super::TERMINAL_DEDUCTION;
use crate::types::{Category, CommandResult, Finding, ScoreResult, Severity};

pub const BUILD_FAILED: &str = "Build failed";

/// A failing build latches auto-fail; a passing one records nothing.
pub fn check_build(outcome: &CommandResult, result: &mut ScoreResult) {
    if outcome.passed() {
        return;
    }

    let detail = if outcome.stderr().is_empty() {
        outcome.stdout()
    } else {
        outcome.stderr()
    };

    result.trigger_auto_fail(BUILD_FAILED);
    result.add_finding(Finding::new(
        Severity::Critical,
        Category::Build,
        format!("{BUILD_FAILED}: {}", detail.trim()),
        TERMINAL_DEDUCTION,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::outcome;
    use crate::types::Gate;

    #[test]
    fn passing_build_adds_nothing() {
        let mut r = ScoreResult::new();
        check_build(&outcome(0, "compiled"), &mut r);
        assert!(r.findings().is_empty());
        assert!(!r.auto_fail());
    }

    #[test]
    fn failing_build_auto_fails() {
        let mut r = ScoreResult::new();
        check_build(&outcome(2, "src/main.c:3: error: expected ';'\n"), &mut r);
        assert!(r.auto_fail());
        assert_eq!(r.auto_fail_reason(), "Build failed");
        assert_eq!(r.gate(), Gate::AutoFail);
        assert_eq!(r.findings().len(), 1);
        let f = &r.findings()[0];
        assert_eq!(f.severity(), Severity::Critical);
        assert_eq!(f.category(), Category::Build);
        assert_eq!(f.deduction(), 100);
        assert_eq!(f.message(), "Build failed: src/main.c:3: error: expected ';'");
    }

    #[test]
    fn message_detail_is_trimmed() {
        let mut r = ScoreResult::new();
        let o = CommandResult::new("make build", 1, "", "\n  linker failed\n\n", 0);
        check_build(&o, &mut r);
        assert_eq!(r.findings()[0].message(), "Build failed: linker failed");
    }

    #[test]
    fn prefers_stderr_for_message() {
        let mut r = ScoreResult::new();
        let o = CommandResult::failure("make build 2>&1", "Command timed out after 120s: make build 2>&1", 0);
        check_build(&o, &mut r);
        assert!(r.findings()[0].message().contains("timed out"));
    }
}
