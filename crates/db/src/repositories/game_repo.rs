//! Repository for the `games` table and its `game_genres` / `game_platforms`
//! junction tables.

use gamestore_core::reconcile::{reconcile_ids, RelationDelta};
use gamestore_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGame, Game, GameWithRelations, UpdateGame};
use crate::repositories::{GenreRepo, PlatformRepo};

/// Column list for the `games` table.
const COLUMNS: &str = "id, name, key, description, created_at, updated_at";

/// Column list for the `games` table (used in JOIN queries).
const JOINED_COLUMNS: &str =
    "g.id, g.name, g.key, g.description, g.created_at, g.updated_at";

/// Describes one many-to-many relation owned by a game.
struct Junction {
    /// Junction table name.
    table: &'static str,
    /// Column referencing the related entity.
    related_column: &'static str,
    /// Table the related ids must exist in.
    related_table: &'static str,
}

const GENRES: Junction = Junction {
    table: "game_genres",
    related_column: "genre_id",
    related_table: "genres",
};

const PLATFORMS: Junction = Junction {
    table: "game_platforms",
    related_column: "platform_id",
    related_table: "platforms",
};

/// Provides CRUD operations for games and their genre/platform associations.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game under `key` together with its initial genre and
    /// platform membership, in one transaction.
    ///
    /// Ids in `genre_ids` / `platform_ids` that do not exist are skipped.
    pub async fn create(pool: &PgPool, input: &CreateGame, key: &str) -> Result<Game, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO games (name, key, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let game = sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(key)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_related(&mut tx, &GENRES, game.id, &input.genre_ids).await?;
        Self::insert_related(&mut tx, &PLATFORMS, game.id, &input.platform_ids).await?;

        tx.commit().await?;
        Ok(game)
    }

    /// Find a game by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a game by its natural key (case-insensitive).
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE lower(key) = lower($1)");
        sqlx::query_as::<_, Game>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Find a game by ID, enriched with its genres and platforms.
    pub async fn find_by_id_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GameWithRelations>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(game) => Ok(Some(Self::with_relations(pool, game).await?)),
            None => Ok(None),
        }
    }

    /// Find a game by key, enriched with its genres and platforms.
    pub async fn find_by_key_with_relations(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<GameWithRelations>, sqlx::Error> {
        match Self::find_by_key(pool, key).await? {
            Some(game) => Ok(Some(Self::with_relations(pool, game).await?)),
            None => Ok(None),
        }
    }

    /// List all games ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY name, id");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// List the games associated with a genre.
    pub async fn list_by_genre(pool: &PgPool, genre_id: DbId) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM games g \
             JOIN game_genres gg ON gg.game_id = g.id \
             WHERE gg.genre_id = $1 \
             ORDER BY g.name, g.id"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    /// List the games available on a platform.
    pub async fn list_by_platform(
        pool: &PgPool,
        platform_id: DbId,
    ) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM games g \
             JOIN game_platforms gp ON gp.game_id = g.id \
             WHERE gp.platform_id = $1 \
             ORDER BY g.name, g.id"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(platform_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a game's scalars and reconcile its genre and platform sets.
    ///
    /// The scalar update and both relation deltas commit in one transaction.
    /// Returns `None` (and changes nothing) if no game has this `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE games SET \
                name = $2, \
                key = $3, \
                description = $4, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let game = sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.key)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(game) = game else {
            tx.rollback().await?;
            return Ok(None);
        };

        let genres = Self::reconcile_relation(&mut tx, &GENRES, id, &input.genre_ids).await?;
        let platforms =
            Self::reconcile_relation(&mut tx, &PLATFORMS, id, &input.platform_ids).await?;

        tx.commit().await?;

        tracing::debug!(
            game_id = %id,
            genres_added = genres.to_add.len(),
            genres_removed = genres.to_remove.len(),
            platforms_added = platforms.to_add.len(),
            platforms_removed = platforms.to_remove.len(),
            "Reconciled game relations",
        );
        Ok(Some(game))
    }

    /// Delete a game by ID. Junction rows cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a game by key (case-insensitive). Junction rows cascade.
    pub async fn delete_by_key(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE lower(key) = lower($1)")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of games.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Relation helpers
    // -----------------------------------------------------------------------

    /// Ids of the genres currently associated with a game.
    pub async fn genre_ids(pool: &PgPool, game_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        Self::related_ids(pool, &GENRES, game_id).await
    }

    /// Ids of the platforms currently associated with a game.
    pub async fn platform_ids(pool: &PgPool, game_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        Self::related_ids(pool, &PLATFORMS, game_id).await
    }

    async fn with_relations(pool: &PgPool, game: Game) -> Result<GameWithRelations, sqlx::Error> {
        let genres = GenreRepo::list_for_game(pool, game.id).await?;
        let platforms = PlatformRepo::list_for_game(pool, game.id).await?;
        Ok(GameWithRelations {
            game,
            genres,
            platforms,
        })
    }

    async fn related_ids(
        pool: &PgPool,
        junction: &Junction,
        game_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let query = format!(
            "SELECT {related} FROM {table} WHERE game_id = $1 ORDER BY {related}",
            related = junction.related_column,
            table = junction.table,
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Diff the stored association set against `desired` and apply the
    /// delta within `tx`.
    async fn reconcile_relation(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        junction: &Junction,
        game_id: DbId,
        desired: &[DbId],
    ) -> Result<RelationDelta, sqlx::Error> {
        let query = format!(
            "SELECT {related} FROM {table} WHERE game_id = $1",
            related = junction.related_column,
            table = junction.table,
        );
        let existing: Vec<DbId> = sqlx::query_scalar(&query)
            .bind(game_id)
            .fetch_all(&mut **tx)
            .await?;

        let delta = reconcile_ids(&existing, desired);
        if delta.is_empty() {
            return Ok(delta);
        }

        if !delta.to_remove.is_empty() {
            let query = format!(
                "DELETE FROM {table} WHERE game_id = $1 AND {related} = ANY($2)",
                related = junction.related_column,
                table = junction.table,
            );
            sqlx::query(&query)
                .bind(game_id)
                .bind(&delta.to_remove)
                .execute(&mut **tx)
                .await?;
        }

        Self::insert_related(tx, junction, game_id, &delta.to_add).await?;

        Ok(delta)
    }

    /// Associate `ids` with a game, skipping ids that do not exist in the
    /// related table.
    async fn insert_related(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        junction: &Junction,
        game_id: DbId,
        ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        if ids.is_empty() {
            return Ok(());
        }

        let query = format!(
            "INSERT INTO {table} (game_id, {related}) \
             SELECT $1, r.id FROM {related_table} r WHERE r.id = ANY($2) \
             ON CONFLICT DO NOTHING",
            related = junction.related_column,
            table = junction.table,
            related_table = junction.related_table,
        );
        sqlx::query(&query)
            .bind(game_id)
            .bind(ids)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
