//! Phase orchestration.
//!
//! Phases run strictly in order and share one [`ScoreResult`]. Only a
//! failing build or test phase ends the run early.

use std::fmt;
use std::path::PathBuf;

use tracing::info;

use crate::checks;
use crate::config::CommandSet;
use crate::heuristics;
use crate::types::{CommandResult, ScoreResult};
use crate::verification::CommandRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Build,
    Tests,
    Lint,
    Typecheck,
    Source,
}

impl Phase {
    /// Execution order.
    pub const ORDER: [Self; 5] = [
        Self::Build,
        Self::Tests,
        Self::Lint,
        Self::Typecheck,
        Self::Source,
    ];

    /// Whether a failure in this phase ends the run.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Build | Self::Tests)
    }

    /// Progress line logged when the phase starts.
    #[must_use]
    pub fn progress(self) -> &'static str {
        match self {
            Self::Build => "Checking build...",
            Self::Tests => "Checking tests...",
            Self::Lint => "Checking lint...",
            Self::Typecheck => "Checking types...",
            Self::Source => "Running source heuristics...",
        }
    }

    fn score_output(self, outcome: &CommandResult, result: &mut ScoreResult) {
        match self {
            Self::Build => checks::check_build(outcome, result),
            Self::Tests => checks::check_tests(outcome, result),
            Self::Lint => checks::check_lint(outcome, result),
            Self::Typecheck => checks::check_typecheck(outcome, result),
            Self::Source => {}
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Build => "build",
            Self::Tests => "tests",
            Self::Lint => "lint",
            Self::Typecheck => "typecheck",
            Self::Source => "source",
        };
        f.write_str(name)
    }
}

/// One scoring run over a project.
pub struct Scorer<'a> {
    runner: &'a dyn CommandRunner,
    commands: &'a CommandSet,
}

impl<'a> Scorer<'a> {
    #[must_use]
    pub fn new(runner: &'a dyn CommandRunner, commands: &'a CommandSet) -> Self {
        Self { runner, commands }
    }

    /// Runs every phase and returns the finished result.
    ///
    /// `discover` is only called if the source phase is reached, so a
    /// failed build never walks the file system.
    pub fn run<F>(&self, discover: F) -> ScoreResult
    where
        F: FnOnce() -> Vec<PathBuf>,
    {
        let mut result = ScoreResult::new();
        let mut discover = Some(discover);

        for phase in Phase::ORDER {
            info!("{}", phase.progress());
            match phase {
                Phase::Source => {
                    let files = discover.take().map(|f| f()).unwrap_or_default();
                    info!(files = files.len(), "scanning source files");
                    heuristics::check_source_files(&files, &mut result);
                }
                _ => self.run_command_phase(phase, &mut result),
            }

            if phase.is_terminal() && result.auto_fail() {
                info!(%phase, reason = result.auto_fail_reason(), "auto-fail, stopping");
                break;
            }
        }

        result
    }

    fn run_command_phase(&self, phase: Phase, result: &mut ScoreResult) {
        let Some(command) = self.commands.for_phase(phase) else {
            return;
        };
        if command.trim().is_empty() {
            info!(%phase, "no command configured, skipping");
            return;
        }
        let outcome = self.runner.run(command);
        info!(
            %phase,
            exit_code = outcome.exit_code(),
            duration_ms = outcome.duration_ms(),
            "command finished"
        );
        phase.score_output(&outcome, result);
    }
}
