//! Repository for the `platforms` table.

use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::platform::{CreatePlatform, Platform, UpdatePlatform};

/// Column list for the `platforms` table.
const COLUMNS: &str = "id, platform_type, created_at, updated_at";

/// Column list for the `platforms` table (used in JOIN queries).
const JOINED_COLUMNS: &str = "p.id, p.platform_type, p.created_at, p.updated_at";

/// Provides CRUD operations for platforms.
pub struct PlatformRepo;

impl PlatformRepo {
    /// Insert a new platform.
    pub async fn create(pool: &PgPool, input: &CreatePlatform) -> Result<Platform, sqlx::Error> {
        let query = format!(
            "INSERT INTO platforms (platform_type) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(&input.platform_type)
            .fetch_one(pool)
            .await
    }

    /// Find a platform by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms WHERE id = $1");
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all platforms ordered by label.
    pub async fn list(pool: &PgPool) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM platforms ORDER BY platform_type, id");
        sqlx::query_as::<_, Platform>(&query).fetch_all(pool).await
    }

    /// Platforms associated with a game.
    pub async fn list_for_game(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<Platform>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM platforms p \
             JOIN game_platforms gp ON gp.platform_id = p.id \
             WHERE gp.game_id = $1 \
             ORDER BY p.platform_type, p.id"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a platform's label. Returns `None` if the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlatform,
    ) -> Result<Option<Platform>, sqlx::Error> {
        let query = format!(
            "UPDATE platforms SET platform_type = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Platform>(&query)
            .bind(id)
            .bind(&input.platform_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a platform by ID. Game associations cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM platforms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
