//! Control-layer facades over the repositories.
//!
//! Each service validates its input, applies domain rules from
//! `gamestore_core`, and logs the outcome. Handlers call services, never
//! repositories directly.

pub mod game;
pub mod genre;
pub mod platform;

pub use game::GameService;
pub use genre::GenreService;
pub use platform::PlatformService;
