//! Repository for the `genres` table.

use gamestore_core::genre_hierarchy::MAX_HIERARCHY_DEPTH;
use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};

/// Column list for the `genres` table.
const COLUMNS: &str = "id, name, parent_genre_id, created_at, updated_at";

/// Column list for the `genres` table (used in JOIN queries).
const JOINED_COLUMNS: &str = "ge.id, ge.name, ge.parent_genre_id, ge.created_at, ge.updated_at";

/// Provides CRUD and hierarchy queries for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (name, parent_genre_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .bind(input.parent_genre_id)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name, id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Direct children of `parent_id`. Does not descend further.
    pub async fn list_children(pool: &PgPool, parent_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM genres \
             WHERE parent_genre_id = $1 \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Total number of genres, seeded ones included.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(pool)
            .await
    }

    /// Number of genres whose parent is `id`.
    pub async fn count_children(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres WHERE parent_genre_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Ancestor chain of `id`, nearest parent first, excluding `id` itself.
    ///
    /// The walk stops after [`MAX_HIERARCHY_DEPTH`] steps so a pre-existing
    /// cycle cannot make it run forever.
    pub async fn ancestor_ids(pool: &PgPool, id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "WITH RECURSIVE ancestors (id, depth) AS ( \
                SELECT parent_genre_id, 1 FROM genres WHERE id = $1 \
                UNION ALL \
                SELECT g.parent_genre_id, a.depth + 1 \
                FROM genres g \
                JOIN ancestors a ON g.id = a.id \
                WHERE a.depth < $2 \
             ) \
             SELECT id FROM ancestors WHERE id IS NOT NULL ORDER BY depth",
        )
        .bind(id)
        .bind(MAX_HIERARCHY_DEPTH)
        .fetch_all(pool)
        .await
    }

    /// Genres associated with a game.
    pub async fn list_for_game(pool: &PgPool, game_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM genres ge \
             JOIN game_genres gg ON gg.genre_id = ge.id \
             WHERE gg.game_id = $1 \
             ORDER BY ge.name, ge.id"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a genre's name and parent.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!(
            "UPDATE genres SET \
                name = $2, \
                parent_genre_id = $3, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.parent_genre_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre by ID.
    ///
    /// Game associations cascade. Fails with a foreign-key violation if the
    /// genre still has children (`ON DELETE RESTRICT`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
