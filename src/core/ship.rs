//! Production build flow: build, mirror the output tree into the deploy
//! directory, then start the long-running serve and dev processes.
//!
//! The two launched processes are independent: neither is awaited, no
//! state is shared, and stagehand's own lifetime is not tied to theirs.

use serde::Serialize;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::build::{self, BuildOutput};
use crate::config::{self, StagehandConfig};
use crate::error::{Error, Result};
use crate::log_status;
use crate::utils::command;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

#[derive(Debug, Serialize)]
pub struct LaunchOutput {
    pub name: &'static str,
    pub directory: String,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShipOutput {
    pub command: &'static str,
    pub build: BuildOutput,
    pub output_dir: String,
    pub deploy_dir: String,
    pub copied: CopyStats,
    pub launches: Vec<LaunchOutput>,
}

/// Run the full flow in the current working directory.
pub fn run(cfg: &StagehandConfig) -> Result<(ShipOutput, i32)> {
    run_in(Path::new("."), cfg)
}

pub fn run_in(base: &Path, cfg: &StagehandConfig) -> Result<(ShipOutput, i32)> {
    // Phase one: build, then mirror the output tree. Strictly sequential.
    // A failed build is reported in the output and the flow continues.
    let (build_output, _) = build::run_in(base, cfg)?;

    let root = config::resolve(base, &cfg.build.project_root);
    let source = config::resolve(&root, &cfg.build.output_dir);
    let destination = config::resolve(&root, &cfg.build.deploy_dir);

    log_status!(
        "ship",
        "Copying {} to {}",
        source.display(),
        destination.display()
    );
    let copied = copy_tree(&source, &destination)?;

    // Phase two: fire-and-forget launches, no coordination point.
    let launches = vec![
        launch("serve", &destination, &cfg.build.serve_command),
        launch("dev", &root, &cfg.build.dev_command),
    ];

    Ok((
        ShipOutput {
            command: "ship.run",
            build: build_output,
            output_dir: source.display().to_string(),
            deploy_dir: destination.display().to_string(),
            copied,
            launches,
        },
        0,
    ))
}

/// Recursively mirror `source` into `destination`.
///
/// Directory structure (including empty directories) is recreated and
/// existing destination files are overwritten. The first failing copy
/// aborts the walk; already-copied files stay on disk.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<CopyStats> {
    let copy_err = |e: String| {
        Error::ship_copy_failed(
            source.display().to_string(),
            destination.display().to_string(),
            e,
        )
    };

    let mut stats = CopyStats::default();
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| copy_err(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| copy_err(e.to_string()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| copy_err(e.to_string()))?;
            if !relative.as_os_str().is_empty() {
                stats.dirs += 1;
            }
        } else {
            fs::copy(entry.path(), &target).map_err(|e| copy_err(e.to_string()))?;
            stats.files += 1;
        }
    }

    Ok(stats)
}

fn launch(name: &'static str, dir: &Path, cmd: &str) -> LaunchOutput {
    log_status!("ship", "Starting '{}' in {}", cmd, dir.display());

    match command::spawn_detached(dir, cmd) {
        Ok(child) => LaunchOutput {
            name,
            directory: dir.display().to_string(),
            command: cmd.to_string(),
            pid: Some(child.id()),
            error: None,
        },
        Err(e) => LaunchOutput {
            name,
            directory: dir.display().to_string(),
            command: cmd.to_string(),
            pid: None,
            error: Some(e.to_string()),
        },
    }
}
