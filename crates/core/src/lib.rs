//! Domain logic for the game catalog.
//!
//! Everything here is storage-agnostic: relation diffing, genre hierarchy
//! rules, game key synthesis, and the canonical export encoding. The `db`
//! and `api` crates build on these.

pub mod error;
pub mod export;
pub mod game_key;
pub mod genre_hierarchy;
pub mod reconcile;
pub mod types;
