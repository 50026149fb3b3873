// src/exit.rs
//! Standardized process exit codes for `qscore`.
//!
//! Provides a stable contract for CI scripts and agents.

use std::process::Termination;

use crate::types::{Gate, ScoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum QscoreExit {
    /// Score reached the commit gate.
    CommitReady = 0,
    /// Score below the commit gate.
    Blocked = 1,
    /// Build failure, test failure, or a hardcoded secret.
    AutoFail = 2,
    /// The tool could not run (bad config, unwritable file).
    Error = 3,
}

impl QscoreExit {
    /// Maps a finished run onto the exit contract.
    #[must_use]
    pub fn for_result(result: &ScoreResult) -> Self {
        if result.auto_fail() {
            Self::AutoFail
        } else if result.passes(Gate::Commit) {
            Self::CommitReady
        } else {
            Self::Blocked
        }
    }

    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for QscoreExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
