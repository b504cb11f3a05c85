use iron_config::IroncladConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod audit;
pub mod config;
pub mod schema;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    config: &IroncladConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Audit(args) => audit::handle(args, config, flags),
        Commands::Schema(args) => schema::handle(args, flags),
        Commands::Config => config::handle(config, flags),
    }
}
