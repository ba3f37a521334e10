use serde::Serialize;
use std::path::Path;

use crate::config::{self, StagehandConfig};
use crate::error::Result;
use crate::log_status;
use crate::utils::command;

#[derive(Debug, Clone, Serialize)]
pub struct BuildOutput {
    pub command: &'static str,
    pub build_command: String,
    pub directory: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Run the configured build command in the project root, streaming its
/// output, and surface the exit code.
///
/// A failed build is reported, not raised: callers receive the exit code
/// and decide whether to stop.
pub fn run(cfg: &StagehandConfig) -> Result<(BuildOutput, i32)> {
    run_in(Path::new("."), cfg)
}

pub fn run_in(base: &Path, cfg: &StagehandConfig) -> Result<(BuildOutput, i32)> {
    let dir = config::resolve(base, &cfg.build.project_root);

    log_status!("build", "Running '{}' in {}", cfg.build.command, dir.display());
    let exit_code = command::run_streaming(&dir, &cfg.build.command)?;

    if exit_code != 0 {
        log_status!("build", "Build command exited with code {}", exit_code);
    }

    Ok((
        BuildOutput {
            command: "build.run",
            build_command: cfg.build.command.clone(),
            directory: dir.display().to_string(),
            exit_code,
            success: exit_code == 0,
        },
        exit_code,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cfg_with_command(command: &str) -> StagehandConfig {
        let mut cfg = StagehandConfig::default();
        cfg.build.command = command.to_string();
        cfg
    }

    #[test]
    fn run_reports_success() {
        let dir = tempdir().unwrap();
        let (output, exit_code) = run_in(dir.path(), &cfg_with_command("exit 0")).unwrap();
        assert_eq!(exit_code, 0);
        assert!(output.success);
    }

    #[test]
    fn run_surfaces_failure_without_error() {
        let dir = tempdir().unwrap();
        let (output, exit_code) = run_in(dir.path(), &cfg_with_command("exit 7")).unwrap();
        assert_eq!(exit_code, 7);
        assert!(!output.success);
        assert_eq!(output.exit_code, 7);
    }
}
