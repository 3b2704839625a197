//! Game entity model and DTOs.
//!
//! A game is associated with genres and platforms through the
//! `game_genres` and `game_platforms` junction tables.

use gamestore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::genre::Genre;
use super::platform::Platform;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A game enriched with its associated genres and platforms.
#[derive(Debug, Clone, Serialize)]
pub struct GameWithRelations {
    #[serde(flatten)]
    pub game: Game,
    pub genres: Vec<Genre>,
    pub platforms: Vec<Platform>,
}

/// DTO for creating a new game.
///
/// An empty or missing `key` is generated from the name.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGame {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    pub key: Option<String>,
    pub description: Option<String>,
    /// Initial genre membership. Unknown ids are ignored.
    #[serde(default)]
    pub genre_ids: Vec<DbId>,
    /// Initial platform membership. Unknown ids are ignored.
    #[serde(default)]
    pub platform_ids: Vec<DbId>,
}

/// DTO for updating a game.
///
/// Scalars are overwritten wholesale. `genre_ids` and `platform_ids` are the
/// desired membership sets; the repository reconciles them against the
/// current junction rows (an omitted list clears that relation).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGame {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub key: String,
    pub description: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<DbId>,
    #[serde(default)]
    pub platform_ids: Vec<DbId>,
}
