//! Handlers for the `/games` resource.
//!
//! Games are addressed by key for reads, deletes, and relationship queries,
//! and by id for the by-id variants and updates.

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use gamestore_core::error::CoreError;
use gamestore_core::export::EXPORT_CONTENT_TYPE;
use gamestore_core::types::DbId;
use gamestore_db::models::game::{CreateGame, UpdateGame};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::services::GameService;
use crate::state::AppState;

/// Response body for the count endpoint.
#[derive(Debug, Serialize)]
pub struct GameCount {
    pub count: i64,
}

fn key_not_found(key: &str) -> AppError {
    AppError::Core(CoreError::KeyNotFound {
        entity: "Game",
        key: key.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/games
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = GameService::get_all(&state.pool).await?;
    Ok(DataResponse::ok(games))
}

/// POST /api/v1/games
///
/// Create a game with its initial genres and platforms. The key is generated
/// from the name when omitted or empty.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<impl IntoResponse> {
    let game = GameService::create(&state.pool, &input).await?;
    state.game_count_cache.invalidate().await;
    Ok(DataResponse::created(game))
}

/// GET /api/v1/games/count
pub async fn count(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = GameService::count(&state.pool).await?;
    Ok(DataResponse::ok(GameCount { count }))
}

/// GET /api/v1/games/by-id/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = GameService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    Ok(DataResponse::ok(game))
}

/// PUT /api/v1/games/by-id/{id}
///
/// Overwrite the game and reconcile its genre and platform sets. Omitted id
/// lists clear the corresponding relation.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGame>,
) -> AppResult<impl IntoResponse> {
    let game = GameService::update(&state.pool, id, &input).await?;
    Ok(DataResponse::ok(game))
}

/// DELETE /api/v1/games/by-id/{id}
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GameService::delete_by_id(&state.pool, id).await? {
        state.game_count_cache.invalidate().await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Game", id }))
    }
}

/// GET /api/v1/games/{key}
pub async fn get_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let game = GameService::get_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| key_not_found(&key))?;
    Ok(DataResponse::ok(game))
}

/// DELETE /api/v1/games/{key}
pub async fn delete_by_key(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<StatusCode> {
    if GameService::delete_by_key(&state.pool, &key).await? {
        state.game_count_cache.invalidate().await;
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(key_not_found(&key))
    }
}

/// GET /api/v1/games/{key}/genres
pub async fn list_genres(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let genres = GameService::genres_for_game(&state.pool, &key)
        .await?
        .ok_or_else(|| key_not_found(&key))?;
    Ok(DataResponse::ok(genres))
}

/// GET /api/v1/games/{key}/platforms
pub async fn list_platforms(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let platforms = GameService::platforms_for_game(&state.pool, &key)
        .await?
        .ok_or_else(|| key_not_found(&key))?;
    Ok(DataResponse::ok(platforms))
}

/// GET /api/v1/games/{key}/file
///
/// Download the game as a JSON text file named `{key}_{yyyymmdd}.txt`.
pub async fn download_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let file = GameService::export_download(&state.pool, &key)
        .await?
        .ok_or_else(|| key_not_found(&key))?;

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        file.file_name
    ))
    .map_err(|e| AppError::Core(CoreError::Internal(format!("Invalid file name: {e}"))))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(EXPORT_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    ))
}
