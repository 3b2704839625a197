//! Canonical game file export.
//!
//! A game and its genres and platforms are written as indented JSON with a
//! fixed field order (struct declaration order) and a fixed ordering of the
//! related lists, so the same entity graph always yields the same bytes.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// MIME type of the downloaded file.
pub const EXPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Top-level export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameFile {
    pub id: DbId,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub genres: Vec<GameFileGenre>,
    pub platforms: Vec<GameFilePlatform>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameFileGenre {
    pub id: DbId,
    pub name: String,
    pub parent_genre_id: Option<DbId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameFilePlatform {
    pub id: DbId,
    #[serde(rename = "type")]
    pub platform_type: String,
}

impl GameFile {
    /// Build a document, putting genres and platforms in canonical order
    /// (by name, then id) regardless of the order they were loaded in.
    pub fn new(
        id: DbId,
        name: String,
        key: String,
        description: Option<String>,
        mut genres: Vec<GameFileGenre>,
        mut platforms: Vec<GameFilePlatform>,
    ) -> Self {
        genres.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        platforms.sort_by(|a, b| {
            a.platform_type
                .cmp(&b.platform_type)
                .then(a.id.cmp(&b.id))
        });
        Self {
            id,
            name,
            key,
            description,
            genres,
            platforms,
        }
    }

    /// Encode as UTF-8, two-space indented JSON terminated by a newline.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        let mut bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| CoreError::Internal(format!("Failed to encode game file: {e}")))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Download filename: `{key}_{yyyymmdd}.txt`.
pub fn export_file_name(key: &str, date: NaiveDate) -> String {
    format!("{key}_{}.txt", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> DbId {
        DbId::from_u128(n)
    }

    fn sample(genres: Vec<GameFileGenre>, platforms: Vec<GameFilePlatform>) -> GameFile {
        GameFile::new(
            id(1),
            "Doom".to_string(),
            "doom".to_string(),
            Some("Rip and tear".to_string()),
            genres,
            platforms,
        )
    }

    fn genre(n: u128, name: &str) -> GameFileGenre {
        GameFileGenre {
            id: id(n),
            name: name.to_string(),
            parent_genre_id: None,
        }
    }

    fn platform(n: u128, label: &str) -> GameFilePlatform {
        GameFilePlatform {
            id: id(n),
            platform_type: label.to_string(),
        }
    }

    #[test]
    fn field_order_is_stable() {
        let bytes = sample(vec![], vec![]).to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let fields = ["id", "name", "key", "description", "genres", "platforms"];
        let positions: Vec<usize> = fields
            .iter()
            .map(|field| text.find(&format!("\"{field}\"")).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn uses_two_space_indent_and_trailing_newline() {
        let text = String::from_utf8(sample(vec![], vec![]).to_bytes().unwrap()).unwrap();
        assert!(text.starts_with("{\n  \"id\": "));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn load_order_does_not_change_output() {
        let a = sample(
            vec![genre(2, "FPS"), genre(3, "Action")],
            vec![platform(5, "PC"), platform(4, "Console")],
        );
        let b = sample(
            vec![genre(3, "Action"), genre(2, "FPS")],
            vec![platform(4, "Console"), platform(5, "PC")],
        );
        assert_eq!(a.to_bytes().unwrap(), b.to_bytes().unwrap());
        assert_eq!(a.genres[0].name, "Action");
        assert_eq!(a.platforms[0].platform_type, "Console");
    }

    #[test]
    fn platform_label_serialized_as_type() {
        let bytes = sample(vec![], vec![platform(4, "PC")]).to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"type\": \"PC\""));
    }

    #[test]
    fn file_name_includes_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap();
        assert_eq!(export_file_name("doom", date), "doom_20241214.txt");
    }
}
