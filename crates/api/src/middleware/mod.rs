//! Cross-cutting HTTP middleware.
//!
//! - [`game_count::total_games_header`] -- Adds the cached total game count
//!   to every response.

pub mod game_count;
