//! Route definitions for games.

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /count              -> count
/// GET    /by-id/{id}         -> get_by_id
/// PUT    /by-id/{id}         -> update
/// DELETE /by-id/{id}         -> delete_by_id
/// GET    /{key}              -> get_by_key
/// DELETE /{key}              -> delete_by_key
/// GET    /{key}/genres       -> list_genres
/// GET    /{key}/platforms    -> list_platforms
/// GET    /{key}/file         -> download_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list).post(games::create))
        .route("/count", get(games::count))
        .route(
            "/by-id/{id}",
            get(games::get_by_id)
                .put(games::update)
                .delete(games::delete_by_id),
        )
        .route(
            "/{key}",
            get(games::get_by_key).delete(games::delete_by_key),
        )
        .route("/{key}/genres", get(games::list_genres))
        .route("/{key}/platforms", get(games::list_platforms))
        .route("/{key}/file", get(games::download_file))
}
