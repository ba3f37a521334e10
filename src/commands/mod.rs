pub type CmdResult<T> = stagehand::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod build;
pub mod component;
pub mod config;
pub mod init;
pub mod ship;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (stagehand::Result<serde_json::Value>, i32) {
    crate::tty::status("stagehand is working...");

    match command {
        crate::Commands::Init(args) => dispatch!(args, init),
        crate::Commands::Component(args) => dispatch!(args, global, component),
        crate::Commands::Build(args) => dispatch!(args, global, build),
        crate::Commands::Ship(args) => dispatch!(args, global, ship),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
