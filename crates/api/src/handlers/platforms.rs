//! Handlers for the `/platforms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamestore_core::error::CoreError;
use gamestore_core::types::DbId;
use gamestore_db::models::platform::{CreatePlatform, UpdatePlatform};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::services::PlatformService;
use crate::state::AppState;

/// GET /api/v1/platforms
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let platforms = PlatformService::get_all(&state.pool).await?;
    Ok(DataResponse::ok(platforms))
}

/// POST /api/v1/platforms
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlatform>,
) -> AppResult<impl IntoResponse> {
    let platform = PlatformService::create(&state.pool, &input).await?;
    Ok(DataResponse::created(platform))
}

/// GET /api/v1/platforms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let platform = PlatformService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id,
        }))?;
    Ok(DataResponse::ok(platform))
}

/// PUT /api/v1/platforms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlatform>,
) -> AppResult<impl IntoResponse> {
    let platform = PlatformService::update(&state.pool, id, &input).await?;
    Ok(DataResponse::ok(platform))
}

/// DELETE /api/v1/platforms/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlatformService::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id,
        }))
    }
}

/// GET /api/v1/platforms/{id}/games
pub async fn list_games(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let games = PlatformService::games_for_platform(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Platform",
            id,
        }))?;
    Ok(DataResponse::ok(games))
}
