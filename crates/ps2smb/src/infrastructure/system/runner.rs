//! Blocking execution of external programs.
//!
//! Every shell-out in ps2smb (`systemctl`, `useradd`, `smbpasswd`, `ip`,
//! `hostname`) goes through these helpers so that command lines are logged
//! the same way and failures become a [`CommandError`] carrying the exit code
//! and stderr.

use std::process::{Command, Stdio};

use ps2smb_core::CommandError;
use tracing::debug;

/// Output from a command execution.
#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Execute a command with captured output.
///
/// # Errors
///
/// Returns [`CommandError::Execution`] if the program cannot be spawned.
pub fn run(program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
    debug!(program, ?args, "executing command");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| CommandError::Execution {
            command: format_command(program, args),
            message: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    let code = output.status.code().unwrap_or(-1);

    debug!(code, "command completed");

    Ok(CommandOutput {
        success: output.status.success(),
        code,
        stdout,
        stderr,
    })
}

/// Execute a command and require success.
///
/// # Errors
///
/// Returns [`CommandError::Failed`] on a non-zero exit status.
pub fn run_ok(program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
    let output = run(program, args)?;

    if !output.success {
        debug!(
            command = %format_command(program, args),
            code = output.code,
            stderr = %output.stderr,
            "command failed"
        );
        return Err(CommandError::Failed {
            command: format_command(program, args),
            code: output.code,
            stderr: output.stderr,
        });
    }

    Ok(output)
}

/// Execute a command attached to the terminal and require success.
///
/// stdin, stdout and stderr are inherited so the program can prompt the user
/// directly (`smbpasswd -a` asks for the new password twice).
///
/// # Errors
///
/// Returns [`CommandError::Execution`] if the program cannot be spawned and
/// [`CommandError::Failed`] on a non-zero exit status (stderr is empty, it
/// went to the terminal).
pub fn run_interactive(program: &str, args: &[&str]) -> Result<(), CommandError> {
    debug!(program, ?args, "executing interactive command");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| CommandError::Execution {
            command: format_command(program, args),
            message: e.to_string(),
        })?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        debug!(command = %format_command(program, args), code, "interactive command failed");
        return Err(CommandError::Failed {
            command: format_command(program, args),
            code,
            stderr: String::new(),
        });
    }

    Ok(())
}

/// Check if a command exists on `PATH`.
pub fn command_exists(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Format command for logging/error messages.
pub fn format_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
