//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteStatsRepository};

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteLinkRepository, SqliteStatsRepository>>,
    pub stats_service: Arc<StatsService<SqliteStatsRepository>>,
    pub base_url: String,
    pub db: Arc<SqlitePool>,
}

impl AppState {
    /// Wires services and repositories over a connection pool.
    pub fn new(pool: Arc<SqlitePool>, base_url: String) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let stats_repository = Arc::new(SqliteStatsRepository::new(pool.clone()));

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            redirect_service: Arc::new(RedirectService::new(
                link_repository,
                stats_repository.clone(),
            )),
            stats_service: Arc::new(StatsService::new(stats_repository)),
            base_url,
            db: pool,
        }
    }
}
