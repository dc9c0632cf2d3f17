//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickLogger, LinkService, RedirectService, StatsService};
use crate::domain::repositories::{ClickRepository, LinkRepository, StoreHealth};

pub type DynLinkService = LinkService<dyn LinkRepository>;
pub type DynRedirectService = RedirectService<dyn LinkRepository, dyn ClickRepository>;
pub type DynStatsService = StatsService<dyn LinkRepository, dyn ClickRepository>;

/// Which store settings were present at startup, reported by `GET /test`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreSettings {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

/// Cloneable handle to the services; everything inside is behind an `Arc`
/// and read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    pub redirect_service: Arc<DynRedirectService>,
    pub stats_service: Arc<DynStatsService>,
    pub store_health: Arc<dyn StoreHealth>,
    pub store_settings: StoreSettings,
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires the services over the given repositories.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        click_repository: Arc<dyn ClickRepository>,
        store_health: Arc<dyn StoreHealth>,
        store_settings: StoreSettings,
        behind_proxy: bool,
    ) -> Self {
        let click_logger = Arc::new(ClickLogger::new(click_repository.clone()));

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(
                link_repository.clone(),
                click_logger,
            )),
            stats_service: Arc::new(StatsService::new(link_repository, click_repository)),
            store_health,
            store_settings,
            behind_proxy,
        }
    }
}
