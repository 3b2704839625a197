//! Schema and seed verification.

use gamestore_db::repositories::GenreRepo;
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    gamestore_db::health_check(&pool).await.unwrap();

    let tables = ["games", "genres", "platforms", "game_genres", "game_platforms"];
    for table in tables {
        sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }
}

/// Every embedded migration is recorded as applied.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migration_status_is_current(pool: PgPool) {
    let status = gamestore_db::migration_status(&pool).await.unwrap();

    assert_eq!(status.expected, 2);
    assert_eq!(status.applied, status.expected);
    assert!(status.is_current());
    assert_eq!(GenreRepo::count(&pool).await.unwrap(), 15);
}

/// The genre seed is 15 rows: six roots with up to two levels below them.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_genre_hierarchy(pool: PgPool) {
    let genres = GenreRepo::list(&pool).await.unwrap();
    assert_eq!(genres.len(), 15);

    let roots: Vec<&str> = genres
        .iter()
        .filter(|g| g.parent_genre_id.is_none())
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(
        roots,
        vec!["Action", "Adventure", "Puzzle & Skill", "RPG", "Sports", "Strategy"]
    );

    let strategy = genres.iter().find(|g| g.name == "Strategy").unwrap();
    let children: Vec<String> = GenreRepo::list_children(&pool, strategy.id)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(children, vec!["RTS", "TBS"]);

    let rally = genres.iter().find(|g| g.name == "Rally").unwrap();
    let ancestors = GenreRepo::ancestor_ids(&pool, rally.id).await.unwrap();
    let races = genres.iter().find(|g| g.name == "Races").unwrap();
    let sports = genres.iter().find(|g| g.name == "Sports").unwrap();
    assert_eq!(ancestors, vec![races.id, sports.id]);
}

/// Unique indexes use the `uq_` prefix the API relies on to map 409s.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_index_naming(pool: PgPool) {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT indexname::text FROM pg_indexes \
         WHERE schemaname = 'public' AND indexdef LIKE 'CREATE UNIQUE INDEX uq_%' \
         ORDER BY indexname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(names, vec!["uq_games_key", "uq_genres_name", "uq_platforms_type"]);
}
