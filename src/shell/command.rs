//! Shell command execution for package-manager delegates.

use crate::error::{DepcheckError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Outcome of a finished shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Turn a non-zero exit into `CommandFailed`.
    pub fn into_checked(self, command: &str) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(DepcheckError::CommandFailed {
                command: command.to_string(),
                code: self.exit_code,
            })
        }
    }
}

/// Execute a shell command in `cwd`, capturing its output into the log.
///
/// Spawn failures are reported as `CommandFailed` with no exit code; a
/// command that runs and exits non-zero is returned as an unsuccessful
/// `CommandResult`.
pub fn execute(command: &str, cwd: &Path) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag())
        .arg(command)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::info!("Running `{}` in {}", command, cwd.display());
    let output = cmd.output().map_err(|e| {
        tracing::warn!("Failed to spawn `{}`: {}", command, e);
        DepcheckError::CommandFailed {
            command: command.to_string(),
            code: None,
        }
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stdout.lines().chain(stderr.lines()) {
        tracing::debug!("{}", line);
    }

    let success = output.status.success();
    if success {
        tracing::info!("`{}` finished in {:?}", command, start.elapsed());
    } else {
        tracing::warn!(
            "`{}` exited with code {:?}",
            command,
            output.status.code()
        );
    }

    Ok(CommandResult {
        exit_code: output.status.code(),
        success,
    })
}

/// Execute a command in `cwd` and fail on non-zero exit.
pub fn execute_in(command: &str, cwd: &Path) -> Result<CommandResult> {
    execute(command, cwd)?.into_checked(command)
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
