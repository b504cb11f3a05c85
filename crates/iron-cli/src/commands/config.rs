use iron_config::IroncladConfig;

use crate::cli::GlobalFlags;
use crate::output;

/// Handle `iron config`.
pub fn handle(config: &IroncladConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(config, flags)
}
