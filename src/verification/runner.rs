//! Command execution and output capture.

use crate::types::CommandResult;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs a single command line through the platform shell and captures
/// stdout/stderr separately.
///
/// Never fails: spawn errors and timeouts become a [`CommandResult`] with
/// exit code -1 and an explanatory stderr.
pub fn run_shell_command(root: &Path, cmd_str: &str, timeout: Duration) -> CommandResult {
    let start = Instant::now();

    if cmd_str.trim().is_empty() {
        return CommandResult::failure(cmd_str, "Empty command", 0);
    }

    let spawned = shell(cmd_str)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            let message = if e.kind() == std::io::ErrorKind::NotFound {
                format!("Command not found: {cmd_str}")
            } else {
                format!("Failed to execute: {e}")
            };
            return CommandResult::failure(cmd_str, message, elapsed_ms(start));
        }
    };

    // Drain both pipes while waiting so a chatty tool cannot fill the pipe
    // buffer and stall forever.
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());
    // An unrepresentable deadline never expires.
    let deadline = start.checked_add(timeout);

    let exit_code = match wait_until(&mut child, deadline) {
        Ok(Some(exit_code)) => exit_code,
        Ok(None) => return timed_out(cmd_str, timeout, start),
        Err(e) => {
            return CommandResult::failure(
                cmd_str,
                format!("Failed to wait for command: {e}"),
                elapsed_ms(start),
            )
        }
    };

    // A background process started by the command keeps the pipes open
    // after the shell exits, so the readers get the same deadline.
    let Some((stdout, stderr)) = join_until(stdout, stderr, deadline) else {
        return timed_out(cmd_str, timeout, start);
    };
    let duration_ms = elapsed_ms(start);
    debug!(command = cmd_str, exit_code, duration_ms, "command finished");
    CommandResult::new(cmd_str, exit_code, stdout, stderr, duration_ms)
}

/// Reader threads still blocked on a pipe are left detached.
fn timed_out(cmd_str: &str, timeout: Duration, start: Instant) -> CommandResult {
    let secs = timeout.as_secs();
    warn!(command = cmd_str, "command timed out after {secs}s");
    CommandResult::failure(
        cmd_str,
        format!("Command timed out after {secs}s: {cmd_str}"),
        elapsed_ms(start),
    )
}

fn shell(cmd_str: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", cmd_str]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", cmd_str]);
        cmd
    }
}

/// Polls the child until it exits or `deadline` passes.
///
/// Returns `Ok(None)` on timeout after killing the child. A child killed by
/// a signal reports exit code -1.
fn wait_until(child: &mut Child, deadline: Option<Instant>) -> std::io::Result<Option<i32>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status.code().unwrap_or(-1)));
        }
        if expired(deadline) {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Joins both readers once they finish, or gives up at `deadline`.
fn join_until(
    stdout: JoinHandle<Vec<u8>>,
    stderr: JoinHandle<Vec<u8>>,
    deadline: Option<Instant>,
) -> Option<(String, String)> {
    while !(stdout.is_finished() && stderr.is_finished()) {
        if expired(deadline) {
            return None;
        }
        thread::sleep(POLL_INTERVAL);
    }
    Some((collect(stdout), collect(stderr)))
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn collect(handle: JoinHandle<Vec<u8>>) -> String {
    let bytes = handle.join().unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
