//! Route definitions for genres.

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Routes mounted at `/genres`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/games         -> list_games
/// GET    /{id}/sub-genres    -> list_sub_genres
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genres::list).post(genres::create))
        .route(
            "/{id}",
            get(genres::get_by_id)
                .put(genres::update)
                .delete(genres::delete),
        )
        .route("/{id}/games", get(genres::list_games))
        .route("/{id}/sub-genres", get(genres::list_sub_genres))
}
