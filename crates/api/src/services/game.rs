//! Game control service.
//!
//! Validates input, applies the key policy, and delegates to [`GameRepo`],
//! whose update path reconciles genre and platform membership inside one
//! transaction. Lookups that find nothing return `None`; only `update`
//! turns a missing game into an error.

use chrono::Utc;
use gamestore_core::error::CoreError;
use gamestore_core::export::{GameFile, GameFileGenre, GameFilePlatform};
use gamestore_core::game_key;
use gamestore_core::types::DbId;
use gamestore_db::models::game::{CreateGame, Game, GameWithRelations, UpdateGame};
use gamestore_db::models::genre::Genre;
use gamestore_db::models::platform::Platform;
use gamestore_db::repositories::{GameRepo, GenreRepo, PlatformRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppResult;

/// A rendered game file ready for download.
#[derive(Debug, Clone)]
pub struct ExportedGameFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct GameService;

impl GameService {
    pub async fn get_all(pool: &PgPool) -> AppResult<Vec<Game>> {
        let games = GameRepo::list(pool).await?;
        tracing::info!(count = games.len(), "Retrieved games");
        Ok(games)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Option<GameWithRelations>> {
        let game = GameRepo::find_by_id_with_relations(pool, id).await?;
        if game.is_none() {
            tracing::warn!(game_id = %id, "Game not found");
        }
        Ok(game)
    }

    pub async fn get_by_key(pool: &PgPool, key: &str) -> AppResult<Option<GameWithRelations>> {
        let game = GameRepo::find_by_key_with_relations(pool, key).await?;
        if game.is_none() {
            tracing::warn!(game_key = %key, "Game not found");
        }
        Ok(game)
    }

    /// Create a game with its initial genre and platform membership.
    ///
    /// An empty or missing key is generated from the name; a supplied key
    /// that collides fails at commit with a unique violation (409).
    pub async fn create(pool: &PgPool, input: &CreateGame) -> AppResult<GameWithRelations> {
        input.validate()?;

        let key = game_key::resolve_key(input.key.as_deref(), &input.name);
        if input.key.as_deref().map_or(true, str::is_empty) {
            tracing::info!(game_key = %key, name = %input.name, "Generated game key");
        }

        let game = GameRepo::create(pool, input, &key).await?;
        tracing::info!(game_id = %game.id, game_key = %game.key, "Game created");

        Self::reload(pool, game.id).await
    }

    /// Overwrite a game's scalars and reconcile its relation sets.
    ///
    /// Fails with `NotFound` when the game does not exist, in which case
    /// nothing is written.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGame,
    ) -> AppResult<GameWithRelations> {
        input.validate()?;

        GameRepo::update(pool, id, input)
            .await?
            .ok_or(CoreError::NotFound { entity: "Game", id })?;
        tracing::info!(game_id = %id, "Game updated");

        Self::reload(pool, id).await
    }

    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> AppResult<bool> {
        let deleted = GameRepo::delete(pool, id).await?;
        if deleted {
            tracing::info!(game_id = %id, "Game deleted");
        } else {
            tracing::warn!(game_id = %id, "Game could not be deleted: not found");
        }
        Ok(deleted)
    }

    pub async fn delete_by_key(pool: &PgPool, key: &str) -> AppResult<bool> {
        let deleted = GameRepo::delete_by_key(pool, key).await?;
        if deleted {
            tracing::info!(game_key = %key, "Game deleted");
        } else {
            tracing::warn!(game_key = %key, "Game could not be deleted: not found");
        }
        Ok(deleted)
    }

    /// Genres of the game with `key`, or `None` if there is no such game.
    pub async fn genres_for_game(pool: &PgPool, key: &str) -> AppResult<Option<Vec<Genre>>> {
        let Some(game) = GameRepo::find_by_key(pool, key).await? else {
            tracing::warn!(game_key = %key, "Game not found");
            return Ok(None);
        };
        Ok(Some(GenreRepo::list_for_game(pool, game.id).await?))
    }

    /// Platforms of the game with `key`, or `None` if there is no such game.
    pub async fn platforms_for_game(
        pool: &PgPool,
        key: &str,
    ) -> AppResult<Option<Vec<Platform>>> {
        let Some(game) = GameRepo::find_by_key(pool, key).await? else {
            tracing::warn!(game_key = %key, "Game not found");
            return Ok(None);
        };
        Ok(Some(PlatformRepo::list_for_game(pool, game.id).await?))
    }

    /// Canonical file bytes for the game with `key`.
    pub async fn export_file(pool: &PgPool, key: &str) -> AppResult<Option<Vec<u8>>> {
        let Some(found) = GameRepo::find_by_key_with_relations(pool, key).await? else {
            tracing::warn!(game_key = %key, "Game not found for file generation");
            return Ok(None);
        };

        let bytes = to_game_file(found).to_bytes()?;
        tracing::info!(game_key = %key, size = bytes.len(), "Game file generated");
        Ok(Some(bytes))
    }

    /// [`Self::export_file`] plus a dated download name.
    pub async fn export_download(pool: &PgPool, key: &str) -> AppResult<Option<ExportedGameFile>> {
        let Some(bytes) = Self::export_file(pool, key).await? else {
            return Ok(None);
        };
        let file_name = gamestore_core::export::export_file_name(key, Utc::now().date_naive());
        Ok(Some(ExportedGameFile { file_name, bytes }))
    }

    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count = GameRepo::count(pool).await?;
        tracing::debug!(count, "Counted games");
        Ok(count)
    }

    async fn reload(pool: &PgPool, id: DbId) -> AppResult<GameWithRelations> {
        let game = GameRepo::find_by_id_with_relations(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Game", id })?;
        Ok(game)
    }
}

fn to_game_file(found: GameWithRelations) -> GameFile {
    let GameWithRelations {
        game,
        genres,
        platforms,
    } = found;

    let genres = genres
        .into_iter()
        .map(|g| GameFileGenre {
            id: g.id,
            name: g.name,
            parent_genre_id: g.parent_genre_id,
        })
        .collect();
    let platforms = platforms
        .into_iter()
        .map(|p| GameFilePlatform {
            id: p.id,
            platform_type: p.platform_type,
        })
        .collect();

    GameFile::new(
        game.id,
        game.name,
        game.key,
        game.description,
        genres,
        platforms,
    )
}
