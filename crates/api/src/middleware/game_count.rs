//! `x-total-numbers-of-games` response header.
//!
//! Every response carries the current number of games. The count is read
//! through [`GameCountCache`] so a burst of requests costs one `COUNT(*)`
//! per TTL window; handlers that add or remove games call
//! [`GameCountCache::invalidate`] so the next response is exact.

use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::services::GameService;
use crate::state::AppState;

/// Response header carrying the total game count.
pub const TOTAL_GAMES_HEADER: &str = "x-total-numbers-of-games";

/// Caches the total game count for a fixed time-to-live.
pub struct GameCountCache {
    ttl: Duration,
    entry: RwLock<Option<(i64, Instant)>>,
}

impl GameCountCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Return the cached count, refreshing it from the database once the
    /// entry is older than the TTL.
    pub async fn get_or_refresh(&self, pool: &PgPool) -> AppResult<i64> {
        if let Some((count, fetched_at)) = *self.entry.read().await {
            if fetched_at.elapsed() < self.ttl {
                return Ok(count);
            }
        }

        let count = GameService::count(pool).await?;
        *self.entry.write().await = Some((count, Instant::now()));
        Ok(count)
    }

    /// Drop the cached entry so the next read hits the database.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }
}

/// Axum middleware attaching [`TOTAL_GAMES_HEADER`] to every response.
///
/// A failed count is logged and the header omitted; the response itself is
/// never turned into an error.
pub async fn total_games_header(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    match state.game_count_cache.get_or_refresh(&state.pool).await {
        Ok(count) => {
            if let Ok(value) = HeaderValue::from_str(&count.to_string()) {
                response.headers_mut().insert(TOTAL_GAMES_HEADER, value);
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read total game count");
        }
    }

    response
}
