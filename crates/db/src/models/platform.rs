//! Platform entity model and DTOs.

use gamestore_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `platforms` table. The label is exposed as `type`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Platform {
    pub id: DbId,
    #[serde(rename = "type")]
    pub platform_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new platform.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlatform {
    #[serde(rename = "type", default)]
    #[validate(length(min = 1))]
    pub platform_type: String,
}

/// DTO for updating a platform's label.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePlatform {
    #[serde(rename = "type", default)]
    #[validate(length(min = 1))]
    pub platform_type: String,
}
