use clap::{Args, Subcommand};

use stagehand::{config, scaffold};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct ComponentArgs {
    #[command(subcommand)]
    pub command: ComponentCommands,
}

#[derive(Subcommand)]
pub enum ComponentCommands {
    /// Scaffold a new component and register it in the site files
    Create {
        /// Component name (first letter is capitalized for the file and symbol)
        name: String,

        /// Overwrite an existing component file and thumbnail
        #[arg(long)]
        force: bool,
    },
    /// List scaffolded components
    List,
}

#[derive(serde::Serialize)]
#[serde(untagged)]
pub enum ComponentResult {
    Create(scaffold::ScaffoldOutput),
    List(scaffold::ComponentListOutput),
}

pub fn run(
    args: ComponentArgs,
    _global: &crate::commands::GlobalArgs,
) -> CmdResult<ComponentResult> {
    let cfg = config::load()?;

    match args.command {
        ComponentCommands::Create { name, force } => {
            let output = scaffold::create(&cfg, &name, force)?;
            Ok((ComponentResult::Create(output), 0))
        }
        ComponentCommands::List => {
            let output = scaffold::list(&cfg)?;
            Ok((ComponentResult::List(output), 0))
        }
    }
}
