#![allow(dead_code)]

use link_shortener::application::services::LinkService;
use link_shortener::infrastructure::persistence::PgShortenRepository;
use link_shortener::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO shorten (url, short_code) VALUES ($1, $2) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn get_access_count(pool: &PgPool, code: &str) -> Option<i64> {
    sqlx::query_scalar::<_, i64>("SELECT access_count FROM shorten WHERE short_code = $1")
        .bind(code)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shorten")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_repository(pool: PgPool) -> Arc<PgShortenRepository> {
    Arc::new(PgShortenRepository::new(Arc::new(pool)))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let link_service = Arc::new(LinkService::new(create_test_repository(pool)));
    AppState::new(link_service)
}
