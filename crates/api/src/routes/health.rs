//! Catalog readiness report, mounted at the root outside `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use gamestore_db::repositories::GenreRepo;
use serde::Serialize;

use crate::state::AppState;

/// Payload of `GET /health`.
///
/// `status` is `"ok"` only when the database answers, every embedded
/// migration is applied, and the genre seed is present. Catalog figures are
/// `null` when they could not be read.
#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub migrations: Option<MigrationsReport>,
    pub genre_count: Option<i64>,
    pub game_count: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MigrationsReport {
    pub applied: i64,
    pub expected: i64,
    pub up_to_date: bool,
}

async fn catalog_health(State(state): State<AppState>) -> Json<CatalogHealth> {
    let db_healthy = gamestore_db::health_check(&state.pool).await.is_ok();

    let (migrations, genre_count, game_count) = if db_healthy {
        let migrations = match gamestore_db::migration_status(&state.pool).await {
            Ok(s) => Some(MigrationsReport {
                applied: s.applied,
                expected: s.expected,
                up_to_date: s.is_current(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read migration ledger");
                None
            }
        };
        let genre_count = GenreRepo::count(&state.pool).await.ok();
        let game_count = state.game_count_cache.get_or_refresh(&state.pool).await.ok();
        (migrations, genre_count, game_count)
    } else {
        (None, None, None)
    };

    let ready = db_healthy
        && migrations.as_ref().is_some_and(|m| m.up_to_date)
        && genre_count.is_some_and(|n| n > 0);

    Json(CatalogHealth {
        status: if ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        migrations,
        genre_count,
        game_count,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(catalog_health))
}
