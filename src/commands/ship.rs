use clap::Args;

use stagehand::{config, ship};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ShipArgs {}

pub fn run(_args: ShipArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ship::ShipOutput> {
    let cfg = config::load()?;
    ship::run(&cfg)
}
