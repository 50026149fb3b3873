//! Scoring data model: findings, severities, gates and the per-run aggregate.

use serde::Serialize;
use std::fmt;

mod command;
pub use command::CommandResult;

/// Score every run starts from before deductions.
pub const BASE_SCORE: u32 = 100;

/// How bad a finding is. Used to bucket findings in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Info,
}

impl Severity {
    /// Reporting order.
    pub const ALL: [Self; 4] = [Self::Critical, Self::Major, Self::Minor, Self::Info];

    /// Upper-case label shown in verbose reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Info => "INFO",
        }
    }
}

/// Which check produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Build,
    Tests,
    Lint,
    Typecheck,
    Complexity,
    Security,
    Maintenance,
    Typing,
}

/// Named quality threshold reached by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gate {
    #[serde(rename = "AUTO-FAIL")]
    AutoFail,
    Release,
    Pr,
    Commit,
    Blocked,
}

impl Gate {
    /// Thresholds in descending order; the first one met wins.
    pub const PASSING: [Self; 3] = [Self::Release, Self::Pr, Self::Commit];

    /// Minimum score for the gate, if it is a passing gate.
    #[must_use]
    pub fn threshold(self) -> Option<u32> {
        match self {
            Self::Release => Some(95),
            Self::Pr => Some(90),
            Self::Commit => Some(80),
            Self::AutoFail | Self::Blocked => None,
        }
    }

    /// Classifies a score. Auto-fail dominates every threshold.
    #[must_use]
    pub fn classify(score: u32, auto_fail: bool) -> Self {
        if auto_fail {
            return Self::AutoFail;
        }
        Self::PASSING
            .into_iter()
            .find(|gate| gate.threshold().is_some_and(|min| score >= min))
            .unwrap_or(Self::Blocked)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AutoFail => "AUTO-FAIL",
            Self::Release => "RELEASE",
            Self::Pr => "PR",
            Self::Commit => "COMMIT",
            Self::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single detected quality issue. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    severity: Severity,
    category: Category,
    message: String,
    file: Option<String>,
    /// 1-based.
    line: Option<usize>,
    deduction: u32,
}

impl Finding {
    /// Creates a project-level finding with no source location.
    #[must_use]
    pub fn new(
        severity: Severity,
        category: Category,
        message: impl Into<String>,
        deduction: u32,
    ) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            file: None,
            line: None,
            deduction,
        }
    }

    /// Attaches a file and 1-based line.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: usize) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    #[must_use]
    pub fn deduction(&self) -> u32 {
        self.deduction
    }

    /// `file:line`, the bare file, or `project` for findings with no location.
    #[must_use]
    pub fn location(&self) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => format!("{file}:{line}"),
            (Some(file), None) => file.clone(),
            (None, _) => "project".to_string(),
        }
    }
}

/// Aggregate for one scoring run.
///
/// Score and gate are derived on every call so they can never drift from
/// the findings list.
#[derive(Debug, Clone, Default)]
pub struct ScoreResult {
    findings: Vec<Finding>,
    /// Reserved for positive adjustments; nothing sets it yet.
    bonus: i32,
    auto_fail: bool,
    auto_fail_reason: String,
}

impl ScoreResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Latches auto-fail. There is no way to clear it within a run.
    pub fn trigger_auto_fail(&mut self, reason: impl Into<String>) {
        self.auto_fail = true;
        self.auto_fail_reason = reason.into();
    }

    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    #[must_use]
    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    #[must_use]
    pub fn auto_fail(&self) -> bool {
        self.auto_fail
    }

    #[must_use]
    pub fn auto_fail_reason(&self) -> &str {
        &self.auto_fail_reason
    }

    #[must_use]
    pub fn total_deductions(&self) -> u64 {
        self.findings.iter().map(|f| u64::from(f.deduction)).sum()
    }

    /// Final 0-100 score; always 0 once auto-fail is latched.
    #[must_use]
    pub fn score(&self) -> u32 {
        if self.auto_fail {
            return 0;
        }
        let raw = i64::from(BASE_SCORE)
            .saturating_sub(i64::try_from(self.total_deductions()).unwrap_or(i64::MAX))
            .saturating_add(i64::from(self.bonus));
        let clamped = raw.clamp(0, i64::from(BASE_SCORE));
        u32::try_from(clamped).unwrap_or(0)
    }

    #[must_use]
    pub fn gate(&self) -> Gate {
        Gate::classify(self.score(), self.auto_fail)
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.count(Severity::Critical)
    }

    #[must_use]
    pub fn major_count(&self) -> usize {
        self.count(Severity::Major)
    }

    #[must_use]
    pub fn minor_count(&self) -> usize {
        self.count(Severity::Minor)
    }

    /// Whether the score clears `gate`'s threshold. Non-passing gates never do.
    #[must_use]
    pub fn passes(&self, gate: Gate) -> bool {
        gate.threshold().is_some_and(|min| self.score() >= min)
    }
}
