pub mod games;
pub mod genres;
pub mod health;
pub mod platforms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /games                          list, create
/// /games/count                    total number of games
/// /games/by-id/{id}               get, update, delete
/// /games/{key}                    get, delete
/// /games/{key}/genres             genres of a game
/// /games/{key}/platforms          platforms of a game
/// /games/{key}/file               download game file
///
/// /genres                         list, create
/// /genres/{id}                    get, update, delete
/// /genres/{id}/games              games in a genre
/// /genres/{id}/sub-genres         direct children
///
/// /platforms                      list, create
/// /platforms/{id}                 get, update, delete
/// /platforms/{id}/games           games on a platform
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/games", games::router())
        .nest("/genres", genres::router())
        .nest("/platforms", platforms::router())
}
