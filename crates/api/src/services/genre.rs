//! Genre control service.
//!
//! Enforces the hierarchy rules on top of [`GenreRepo`]: a parent must
//! exist, may not be the genre itself or one of its descendants, and a genre
//! with sub-genres cannot be deleted.

use gamestore_core::error::CoreError;
use gamestore_core::genre_hierarchy;
use gamestore_core::types::DbId;
use gamestore_db::models::game::Game;
use gamestore_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use gamestore_db::repositories::{GameRepo, GenreRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::AppResult;

pub struct GenreService;

impl GenreService {
    pub async fn get_all(pool: &PgPool) -> AppResult<Vec<Genre>> {
        let genres = GenreRepo::list(pool).await?;
        tracing::info!(count = genres.len(), "Retrieved genres");
        Ok(genres)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Option<Genre>> {
        let genre = GenreRepo::find_by_id(pool, id).await?;
        if genre.is_none() {
            tracing::warn!(genre_id = %id, "Genre not found");
        }
        Ok(genre)
    }

    pub async fn create(pool: &PgPool, input: &CreateGenre) -> AppResult<Genre> {
        input.validate()?;
        Self::check_parent(pool, None, input.parent_genre_id).await?;

        let genre = GenreRepo::create(pool, input).await?;
        tracing::info!(genre_id = %genre.id, name = %genre.name, "Genre created");
        Ok(genre)
    }

    /// Overwrite a genre's name and parent.
    ///
    /// Fails with `NotFound` when the genre does not exist and with
    /// `Validation` when the new parent would close a cycle.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateGenre) -> AppResult<Genre> {
        input.validate()?;

        if GenreRepo::find_by_id(pool, id).await?.is_none() {
            return Err(CoreError::NotFound { entity: "Genre", id }.into());
        }
        Self::check_parent(pool, Some(id), input.parent_genre_id).await?;

        let genre = GenreRepo::update(pool, id, input)
            .await?
            .ok_or(CoreError::NotFound { entity: "Genre", id })?;
        tracing::info!(genre_id = %id, "Genre updated");
        Ok(genre)
    }

    /// Delete a genre that has no sub-genres. Returns `false` if it does not
    /// exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<bool> {
        let children = GenreRepo::count_children(pool, id).await?;
        genre_hierarchy::ensure_deletable(id, children)?;

        let deleted = GenreRepo::delete(pool, id).await?;
        if deleted {
            tracing::info!(genre_id = %id, "Genre deleted");
        } else {
            tracing::warn!(genre_id = %id, "Genre could not be deleted: not found");
        }
        Ok(deleted)
    }

    /// Games tagged with the genre, or `None` if the genre does not exist.
    pub async fn games_for_genre(pool: &PgPool, id: DbId) -> AppResult<Option<Vec<Game>>> {
        if GenreRepo::find_by_id(pool, id).await?.is_none() {
            tracing::warn!(genre_id = %id, "Genre not found");
            return Ok(None);
        }
        Ok(Some(GameRepo::list_by_genre(pool, id).await?))
    }

    /// Direct children of `parent_id`. Empty when the parent has none or
    /// does not exist.
    pub async fn sub_genres(pool: &PgPool, parent_id: DbId) -> AppResult<Vec<Genre>> {
        let children = GenreRepo::list_children(pool, parent_id).await?;
        tracing::info!(genre_id = %parent_id, count = children.len(), "Retrieved sub-genres");
        Ok(children)
    }

    async fn check_parent(
        pool: &PgPool,
        genre_id: Option<DbId>,
        parent_id: Option<DbId>,
    ) -> AppResult<()> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };

        genre_hierarchy::validate_parent(genre_id, Some(parent_id), &[])?;

        if GenreRepo::find_by_id(pool, parent_id).await?.is_none() {
            return Err(CoreError::Validation(format!(
                "Parent genre {parent_id} does not exist"
            ))
            .into());
        }

        // A new genre has no descendants, so only updates can close a cycle.
        if genre_id.is_some() {
            let ancestors = GenreRepo::ancestor_ids(pool, parent_id).await?;
            genre_hierarchy::validate_parent(genre_id, Some(parent_id), &ancestors)?;
        }
        Ok(())
    }
}
