//! Command execution primitives with consistent error handling.
//!
//! Build, serve, and dev commands are configured as shell strings
//! (`npm run build`, `npm exec http-server`) and may use shell features,
//! so everything here runs through the platform shell.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::error::{Error, Result};

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

/// Run a shell command in a directory, streaming output to the caller's
/// stdout/stderr, and block until it exits.
///
/// Returns the exit code. A non-zero exit is not an error here; callers
/// decide what a failed command means for their flow.
pub fn run_streaming(dir: &Path, command: &str) -> Result<i32> {
    let status = shell_command(command)
        .current_dir(dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            Error::internal_io(
                format!("Failed to run '{}': {}", command, e),
                Some(format!("run in {}", dir.display())),
            )
        })?;

    Ok(status.code().unwrap_or(-1))
}

/// Start a long-running shell command in a directory and return without
/// waiting. Output streams to the caller's stdout/stderr; the child's
/// lifetime is not tied to this process.
pub fn spawn_detached(dir: &Path, command: &str) -> Result<Child> {
    shell_command(command)
        .current_dir(dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            Error::internal_io(
                format!("Failed to start '{}': {}", command, e),
                Some(format!("spawn in {}", dir.display())),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_streaming_returns_zero_for_success() {
        let code = run_streaming(Path::new("."), "exit 0").unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn run_streaming_surfaces_nonzero_exit() {
        let code = run_streaming(Path::new("."), "exit 3").unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn run_streaming_fails_for_missing_directory() {
        let result = run_streaming(Path::new("/nonexistent/dir"), "exit 0");
        assert!(result.is_err());
    }

    #[test]
    fn spawn_detached_returns_running_child() {
        let mut child = spawn_detached(Path::new("."), "exit 0").unwrap();
        assert!(child.id() > 0);
        // Reap so the test process does not leak a zombie.
        child.wait().unwrap();
    }
}
