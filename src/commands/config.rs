use clap::{Args, Subcommand};
use serde::Serialize;

use stagehand::config::{self, StagehandConfig};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
    /// Show the config file path
    Path,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ConfigResult {
    Show(ConfigShowOutput),
    Path(ConfigPathOutput),
}

#[derive(Serialize)]
pub struct ConfigShowOutput {
    pub command: &'static str,
    pub path: String,
    pub exists: bool,
    pub config: StagehandConfig,
}

#[derive(Serialize)]
pub struct ConfigPathOutput {
    pub command: &'static str,
    pub path: String,
    pub exists: bool,
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigResult> {
    let path = config::config_path();
    let exists = config::config_exists();

    match args.command {
        ConfigCommands::Show => {
            let cfg = config::load()?;
            Ok((
                ConfigResult::Show(ConfigShowOutput {
                    command: "config.show",
                    path: path.display().to_string(),
                    exists,
                    config: cfg,
                }),
                0,
            ))
        }
        ConfigCommands::Path => Ok((
            ConfigResult::Path(ConfigPathOutput {
                command: "config.path",
                path: path.display().to_string(),
                exists,
            }),
            0,
        )),
    }
}
