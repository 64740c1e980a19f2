use std::sync::Arc;

use drip_core::drip::UnlockResolver;
use drip_core::holiday::HolidayCache;
use drip_db::PgDripSources;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: drip_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process-wide holiday cache; invalidated by every holiday mutation.
    pub holiday_cache: Arc<HolidayCache>,
}

impl AppState {
    pub fn new(pool: drip_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            holiday_cache: Arc::new(HolidayCache::new()),
        }
    }

    /// Store-backed drip sources for one request.
    pub fn drip_sources(&self) -> PgDripSources<'_> {
        PgDripSources::new(&self.pool, &self.holiday_cache)
    }

    /// A resolver over `sources` using the configured unnumbered-topic policy.
    pub fn unlock_resolver<'a>(&self, sources: &'a PgDripSources<'a>) -> UnlockResolver<'a> {
        UnlockResolver::new(sources, sources, sources, self.config.unnumbered_topics)
    }
}
