use anyhow::Context;
use hub_config::HubConfig;
use hub_core::session::Session;
use hub_db::service::HubService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: HubService,
    pub config: HubConfig,
    actor: Option<i64>,
}

impl AppContext {
    /// Open the configured database and run migrations.
    pub async fn init(config: HubConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let service = HubService::open(&config).await.with_context(|| {
            format!("failed to open workhub database at {}", config.database.path)
        })?;
        Ok(Self {
            service,
            config,
            actor: flags.actor,
        })
    }

    /// Session for the `--actor` flag. Every change needs one.
    pub fn session(&self) -> anyhow::Result<Session> {
        let actor = self
            .actor
            .ok_or_else(|| anyhow::anyhow!("No actor. Pass --actor <id> to record changes."))?;
        Ok(Session::new(actor)?.with_label("workhub-cli"))
    }

    /// List limit: `--limit`, else `general.default_limit`.
    #[must_use]
    pub fn limit(&self, flags: &GlobalFlags) -> u32 {
        flags.limit.unwrap_or(self.config.general.default_limit)
    }
}
