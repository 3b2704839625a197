//! HTTP-level integration tests for the `/genres` resource.
//!
//! The seed migration provides 15 genres; tests that need a fresh tree
//! create their own under distinct names.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete, get, post_json, put_json, RACES, RALLY, RTS, SPORTS,
    STRATEGY, TBS,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_genre(pool: &PgPool, name: &str, parent: Option<&str>) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/genres",
        json!({ "name": name, "parent_genre_id": parent }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: parent with children cannot be deleted until the children are gone
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn parent_delete_blocked_until_child_removed(pool: PgPool) {
    let parent = create_genre(&pool, "Grand Strategy", None).await;
    let child = create_genre(&pool, "Space 4X", Some(&parent)).await;

    let app = build_test_app(pool.clone());
    let subs = body_json(get(app, &format!("/api/v1/genres/{parent}/sub-genres")).await).await;
    assert_eq!(names(&subs), vec!["Space 4X"]);

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/genres/{parent}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let app = build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/v1/genres/{child}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = build_test_app(pool.clone());
    assert_eq!(
        delete(app, &format!("/api/v1/genres/{parent}")).await.status(),
        StatusCode::NO_CONTENT
    );

    let app = build_test_app(pool);
    assert_eq!(
        get(app, &format!("/api/v1/genres/{parent}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

// ---------------------------------------------------------------------------
// Test: seeded tree
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn seeded_sub_genres_are_direct_children_only(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/genres/{STRATEGY}/sub-genres")).await).await;
    assert_eq!(names(&json), vec!["RTS", "TBS"]);

    let app = build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/genres/{SPORTS}/sub-genres")).await).await;
    assert_eq!(names(&json), vec!["Races"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sub_genres_of_leaf_or_unknown_is_empty(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/genres/{RALLY}/sub-genres")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let app = build_test_app(pool);
    let response = get(
        app,
        "/api/v1/genres/7d4c2a3e-0000-4000-8000-000000000000/sub-genres",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_contains_all_seeded_genres(pool: PgPool) {
    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/v1/genres").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 15);
}

// ---------------------------------------------------------------------------
// Test: hierarchy validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn self_parent_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/genres/{RTS}"),
        json!({ "name": "RTS", "parent_genre_id": RTS }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reparenting_under_descendant_is_rejected(pool: PgPool) {
    // Sports -> Races -> Rally; making Sports a child of Rally closes a cycle.
    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/genres/{SPORTS}"),
        json!({ "name": "Sports", "parent_genre_id": RALLY }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/genres/{SPORTS}")).await).await;
    assert!(json["data"]["parent_genre_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_parent_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/genres",
        json!({
            "name": "Orphan",
            "parent_genre_id": "7d4c2a3e-0000-4000-8000-000000000000",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reparent_and_make_root(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/genres/{TBS}"),
        json!({ "name": "TBS", "parent_genre_id": RACES }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["parent_genre_id"], RACES);

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/genres/{TBS}"),
        json!({ "name": "Turn-Based Strategy", "parent_genre_id": null }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Turn-Based Strategy");
    assert!(json["data"]["parent_genre_id"].is_null());

    let app = build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/genres/{STRATEGY}/sub-genres")).await).await;
    assert_eq!(names(&json), vec!["RTS"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_or_duplicate_name_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/genres", json!({ "name": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/genres", json!({ "name": "strategy" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_genre_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/genres/7d4c2a3e-0000-4000-8000-000000000000",
        json!({ "name": "Ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: games of a genre
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn games_for_genre(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/games",
        json!({ "name": "Dune II", "key": "dune-2", "genre_ids": [RTS] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/genres/{RTS}/games")).await).await;
    assert_eq!(names(&json), vec!["Dune II"]);

    // Parent genres do not inherit their children's games.
    let app = build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/genres/{STRATEGY}/games")).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    let app = build_test_app(pool);
    let response = get(
        app,
        "/api/v1/genres/7d4c2a3e-0000-4000-8000-000000000000/games",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
