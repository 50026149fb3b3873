//! External command execution.
//!
//! Runs the configured build/test/lint/typecheck commands from the project
//! root and captures their output as [`CommandResult`]s.

mod runner;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use crate::types::CommandResult;
pub use runner::run_shell_command;

/// Anything that can turn a shell command line into a [`CommandResult`].
///
/// Implementations must never fail: infrastructure problems are folded
/// into a failing result.
pub trait CommandRunner {
    fn run(&self, command: &str) -> CommandResult;
}

/// Runs commands through the platform shell with a per-command timeout.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    root: PathBuf,
    timeout: Duration,
}

impl ShellRunner {
    #[must_use]
    pub fn new(root: &Path, timeout: Duration) -> Self {
        Self {
            root: root.to_path_buf(),
            timeout,
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> CommandResult {
        run_shell_command(&self.root, command, self.timeout)
    }
}
