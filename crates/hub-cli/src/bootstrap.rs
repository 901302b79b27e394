use anyhow::Context;
use hub_config::HubConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration, then apply `--db`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HubConfig> {
    let mut config = HubConfig::load_with_dotenv().context("failed to load workhub config")?;
    if let Some(path) = &flags.db {
        config.database.path.clone_from(path);
    }
    tracing::debug!(db = %config.database.path, "configuration loaded");
    Ok(config)
}
