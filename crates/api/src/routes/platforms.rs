//! Route definitions for platforms.

use axum::routing::get;
use axum::Router;

use crate::handlers::platforms;
use crate::state::AppState;

/// Routes mounted at `/platforms`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/games         -> list_games
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(platforms::list).post(platforms::create))
        .route(
            "/{id}",
            get(platforms::get_by_id)
                .put(platforms::update)
                .delete(platforms::delete),
        )
        .route("/{id}/games", get(platforms::list_games))
}
