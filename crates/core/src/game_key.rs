//! Natural-key synthesis for games.
//!
//! A game created without a key gets its lowercased name followed by a
//! random UUID, so uniqueness holds without a pre-check query. Supplied keys
//! are taken as-is and left to the `uq_games_key` index.

use uuid::Uuid;

/// Generate a unique key for a game named `name`.
///
/// Format: `{lowercase name}-{uuid-simple}`. The name is kept as written,
/// spaces and punctuation included, so the key always starts with
/// `name.to_lowercase()`.
///
/// ```
/// use gamestore_core::game_key::generate_key;
///
/// let key = generate_key("Need for Speed");
/// assert!(key.starts_with("need for speed-"));
/// ```
pub fn generate_key(name: &str) -> String {
    format!("{}-{}", name.to_lowercase(), Uuid::new_v4().simple())
}

/// Return `supplied` when it is non-empty, otherwise a generated key.
pub fn resolve_key(supplied: Option<&str>, name: &str) -> String {
    match supplied {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => generate_key(name),
    }
}
