use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::game_count::GameCountCache;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gamestore_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Short-lived cache backing the `x-total-numbers-of-games` header.
    pub game_count_cache: Arc<GameCountCache>,
}

impl AppState {
    /// Build state from a pool and config, sizing the count cache from
    /// `config.game_count_cache_ttl_secs`.
    pub fn new(pool: gamestore_db::DbPool, config: ServerConfig) -> Self {
        let ttl = std::time::Duration::from_secs(config.game_count_cache_ttl_secs);
        Self {
            pool,
            config: Arc::new(config),
            game_count_cache: Arc::new(GameCountCache::new(ttl)),
        }
    }
}
