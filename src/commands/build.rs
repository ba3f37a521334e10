use clap::Args;

use stagehand::{build, config};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct BuildArgs {}

pub fn run(_args: BuildArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<build::BuildOutput> {
    let cfg = config::load()?;
    build::run(&cfg)
}
