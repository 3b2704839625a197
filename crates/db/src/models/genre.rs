//! Genre entity model and DTOs.
//!
//! Genres form a forest through the nullable `parent_genre_id`
//! self-reference. Children are always resolved by query
//! (`GenreRepo::list_children`); rows never hold back-references.

use gamestore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub parent_genre_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    pub parent_genre_id: Option<DbId>,
}

/// DTO for updating a genre. Both fields are written as given; a `null`
/// parent turns the genre into a root.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGenre {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub name: String,
    pub parent_genre_id: Option<DbId>,
}
