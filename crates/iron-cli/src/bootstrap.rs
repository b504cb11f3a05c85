use std::path::Path;

use anyhow::Context;
use iron_config::IroncladConfig;

/// Load `.env` (if any) and the layered configuration.
pub fn load_config(extra: Option<&Path>) -> anyhow::Result<IroncladConfig> {
    load_dotenv()?;

    if let Some(path) = extra {
        anyhow::ensure!(
            path.is_file(),
            "config file '{}' does not exist",
            path.display()
        );
    }

    IroncladConfig::load_from(extra).context("failed to load ironclad configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    }
    Ok(())
}
