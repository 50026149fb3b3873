//! Result of an external command execution.

/// Exit code recorded when the process never produced one (spawn failure,
/// timeout, killed by signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Result of an external command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// The command that was executed (display form).
    command: String,
    /// Whether the command succeeded (exit code 0).
    passed: bool,
    /// Process exit code (-1 if unavailable).
    exit_code: i32,
    stdout: String,
    stderr: String,
    /// Execution time in milliseconds.
    duration_ms: u64,
}

impl CommandResult {
    /// Creates a new command result.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            command: command.into(),
            passed: exit_code == 0,
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            duration_ms,
        }
    }

    /// A run that never completed: not found, could not spawn, or timed out.
    #[must_use]
    pub fn failure(command: impl Into<String>, message: impl Into<String>, duration_ms: u64) -> Self {
        Self::new(command, NO_EXIT_CODE, String::new(), message, duration_ms)
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether the command succeeded (exit code 0).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Combined stdout and stderr output.
    #[must_use]
    pub fn output(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else if self.stdout.is_empty() {
            self.stderr.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}
