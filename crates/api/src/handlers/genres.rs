//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamestore_core::error::CoreError;
use gamestore_core::types::DbId;
use gamestore_db::models::genre::{CreateGenre, UpdateGenre};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::services::GenreService;
use crate::state::AppState;

/// GET /api/v1/genres
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreService::get_all(&state.pool).await?;
    Ok(DataResponse::ok(genres))
}

/// POST /api/v1/genres
///
/// Create a genre, optionally under an existing parent.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreService::create(&state.pool, &input).await?;
    Ok(DataResponse::created(genre))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(DataResponse::ok(genre))
}

/// PUT /api/v1/genres/{id}
///
/// Rename and re-parent a genre. A `null` parent makes it a root genre.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreService::update(&state.pool, id, &input).await?;
    Ok(DataResponse::ok(genre))
}

/// DELETE /api/v1/genres/{id}
///
/// Returns 409 while the genre still has sub-genres.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GenreService::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
    }
}

/// GET /api/v1/genres/{id}/games
pub async fn list_games(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let games = GenreService::games_for_genre(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(DataResponse::ok(games))
}

/// GET /api/v1/genres/{id}/sub-genres
///
/// Direct children only. An unknown parent yields an empty list.
pub async fn list_sub_genres(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let children = GenreService::sub_genres(&state.pool, id).await?;
    Ok(DataResponse::ok(children))
}
