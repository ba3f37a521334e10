use clap::Args;
use serde::Serialize;
use std::path::Path;

use stagehand::config::{self, StagehandConfig};
use stagehand::Error;

use crate::commands::CmdResult;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing stagehand.json
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub command: &'static str,
    pub path: String,
    pub next_steps: Vec<String>,
}

/// Write a default stagehand.json into the current directory.
pub fn run_json(args: InitArgs) -> CmdResult<InitOutput> {
    let path = Path::new("stagehand.json");

    if path.exists() && !args.force {
        return Err(Error::validation_invalid_argument(
            "path",
            "stagehand.json already exists in this directory",
        )
        .with_hint("Re-run with --force to overwrite it"));
    }

    config::save(&StagehandConfig::default(), path)?;

    Ok((
        InitOutput {
            command: "init",
            path: path.display().to_string(),
            next_steps: vec![
                "Edit stagehand.json to match your site layout.".to_string(),
                "Scaffold a component with `stagehand component create <name>`.".to_string(),
                "Build and launch the site with `stagehand ship`.".to_string(),
            ],
        },
        0,
    ))
}
