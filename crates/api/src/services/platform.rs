//! Platform control service.

use gamestore_core::error::CoreError;
use gamestore_core::types::DbId;
use gamestore_db::models::game::Game;
use gamestore_db::models::platform::{CreatePlatform, Platform, UpdatePlatform};
use gamestore_db::repositories::{GameRepo, PlatformRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppResult;

pub struct PlatformService;

impl PlatformService {
    pub async fn get_all(pool: &PgPool) -> AppResult<Vec<Platform>> {
        let platforms = PlatformRepo::list(pool).await?;
        tracing::info!(count = platforms.len(), "Retrieved platforms");
        Ok(platforms)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Option<Platform>> {
        let platform = PlatformRepo::find_by_id(pool, id).await?;
        if platform.is_none() {
            tracing::warn!(platform_id = %id, "Platform not found");
        }
        Ok(platform)
    }

    pub async fn create(pool: &PgPool, input: &CreatePlatform) -> AppResult<Platform> {
        input.validate()?;
        let platform = PlatformRepo::create(pool, input).await?;
        tracing::info!(
            platform_id = %platform.id,
            platform_type = %platform.platform_type,
            "Platform created",
        );
        Ok(platform)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePlatform) -> AppResult<Platform> {
        input.validate()?;
        let platform = PlatformRepo::update(pool, id, input)
            .await?
            .ok_or(CoreError::NotFound { entity: "Platform", id })?;
        tracing::info!(platform_id = %id, "Platform updated");
        Ok(platform)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<bool> {
        let deleted = PlatformRepo::delete(pool, id).await?;
        if deleted {
            tracing::info!(platform_id = %id, "Platform deleted");
        } else {
            tracing::warn!(platform_id = %id, "Platform could not be deleted: not found");
        }
        Ok(deleted)
    }

    /// Games available on the platform, or `None` if it does not exist.
    pub async fn games_for_platform(pool: &PgPool, id: DbId) -> AppResult<Option<Vec<Game>>> {
        if PlatformRepo::find_by_id(pool, id).await?.is_none() {
            tracing::warn!(platform_id = %id, "Platform not found");
            return Ok(None);
        }
        Ok(Some(GameRepo::list_by_platform(pool, id).await?))
    }
}
