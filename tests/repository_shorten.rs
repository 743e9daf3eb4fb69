mod common;

use link_shortener::domain::entities::NewShortenedLink;
use link_shortener::domain::repositories::{RepositoryError, ShortenRepository};
use link_shortener::infrastructure::persistence::PgShortenRepository;
use link_shortener::infrastructure::persistence::schema::configure_url_uniqueness;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

fn new_link(url: &str, code: &str) -> NewShortenedLink {
    NewShortenedLink {
        url: url.to_string(),
        short_code: code.to_string(),
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgShortenRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("https://example.com/path?x=1", "create1"))
        .await
        .unwrap();

    assert!(link.id > 0);
    assert_eq!(link.short_code, "create1");
    assert_eq!(link.url, "https://example.com/path?x=1");
    assert_eq!(link.access_count, 0);
    assert_eq!(link.created_at, link.updated_at);
}

#[sqlx::test]
async fn test_create_then_find_round_trip(pool: PgPool) {
    let repo = PgShortenRepository::new(Arc::new(pool));

    let created = repo
        .create(new_link("https://example.com", "round1"))
        .await
        .unwrap();
    let found = repo.find_by_code("round1").await.unwrap();

    assert_eq!(found, created);
    assert_eq!(found.access_count, 0);
}

#[sqlx::test]
async fn test_create_duplicate_code_is_constraint_violation(pool: PgPool) {
    common::create_test_link(&pool, "dup", "https://a.example.com").await;
    let repo = PgShortenRepository::new(Arc::new(pool));

    let result = repo.create(new_link("https://b.example.com", "dup")).await;

    match result.unwrap_err() {
        RepositoryError::ConstraintViolation { constraint } => {
            assert_eq!(constraint, "shorten_short_code_key");
        }
        other => panic!("expected constraint violation, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_duplicate_url_allowed_by_default(pool: PgPool) {
    let repo = PgShortenRepository::new(Arc::new(pool));

    repo.create(new_link("https://example.com", "first"))
        .await
        .unwrap();
    let second = repo.create(new_link("https://example.com", "second")).await;

    assert!(second.is_ok());
}

#[sqlx::test]
async fn test_duplicate_url_rejected_when_enforced(pool: PgPool) {
    configure_url_uniqueness(&pool, true).await.unwrap();
    let repo = PgShortenRepository::new(Arc::new(pool.clone()));

    repo.create(new_link("https://example.com", "first"))
        .await
        .unwrap();
    let second = repo.create(new_link("https://example.com", "second")).await;

    assert!(matches!(
        second.unwrap_err(),
        RepositoryError::ConstraintViolation { .. }
    ));

    configure_url_uniqueness(&pool, false).await.unwrap();
    assert!(
        repo.create(new_link("https://example.com", "third"))
            .await
            .is_ok()
    );
}

#[sqlx::test]
async fn test_unknown_code_is_not_found_everywhere(pool: PgPool) {
    let repo = PgShortenRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("missing").await.unwrap_err().is_not_found());
    assert!(
        repo.find_by_code_with_access_count("missing")
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(repo.delete("missing").await.unwrap_err().is_not_found());
    assert!(
        repo.update("missing", "https://example.com")
            .await
            .unwrap_err()
            .is_not_found()
    );
    assert!(
        repo.increment_access_count("missing")
            .await
            .unwrap_err()
            .is_not_found()
    );
}

#[sqlx::test]
async fn test_delete_then_find_is_not_found(pool: PgPool) {
    common::create_test_link(&pool, "bye", "https://example.com").await;
    let repo = PgShortenRepository::new(Arc::new(pool.clone()));

    repo.delete("bye").await.unwrap();

    assert!(repo.find_by_code("bye").await.unwrap_err().is_not_found());
    assert!(repo.delete("bye").await.unwrap_err().is_not_found());
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_update_keeps_identity(pool: PgPool) {
    let id = common::create_test_link(&pool, "upd", "https://old.example.com").await;
    let repo = PgShortenRepository::new(Arc::new(pool));
    let before = repo.find_by_code("upd").await.unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;

    let updated = repo.update("upd", "https://new.example.com").await.unwrap();
    let found = repo.find_by_code("upd").await.unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(found.id, id);
    assert_eq!(found.short_code, "upd");
    assert_eq!(found.url, "https://new.example.com");
    assert_eq!(found.created_at, before.created_at);
    assert!(updated.updated_at > before.updated_at);
    assert_eq!(found.updated_at, updated.updated_at);
}

#[sqlx::test]
async fn test_increment_leaves_updated_at_unchanged(pool: PgPool) {
    common::create_test_link(&pool, "cnt", "https://example.com").await;
    let repo = PgShortenRepository::new(Arc::new(pool));
    let before = repo.find_by_code("cnt").await.unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;
    repo.increment_access_count("cnt").await.unwrap();

    let after = repo.find_by_code("cnt").await.unwrap();
    assert_eq!(after.access_count, before.access_count + 1);
    assert_eq!(after.updated_at, before.updated_at);
}

#[sqlx::test]
async fn test_update_to_taken_url_when_enforced(pool: PgPool) {
    configure_url_uniqueness(&pool, true).await.unwrap();
    common::create_test_link(&pool, "linka", "https://a.example.com").await;
    common::create_test_link(&pool, "linkb", "https://b.example.com").await;
    let repo = PgShortenRepository::new(Arc::new(pool));

    let result = repo.update("linkb", "https://a.example.com").await;

    match result.unwrap_err() {
        RepositoryError::ConstraintViolation { constraint } => {
            assert_eq!(constraint, "shorten_url_key");
        }
        other => panic!("expected constraint violation, got {other:?}"),
    }
    let unchanged = repo.find_by_code("linkb").await.unwrap();
    assert_eq!(unchanged.url, "https://b.example.com");
}

#[sqlx::test]
async fn test_increment_access_count(pool: PgPool) {
    common::create_test_link(&pool, "inc", "https://example.com").await;
    let repo = PgShortenRepository::new(Arc::new(pool.clone()));

    repo.increment_access_count("inc").await.unwrap();
    repo.increment_access_count("inc").await.unwrap();

    let stats = repo.find_by_code_with_access_count("inc").await.unwrap();
    assert_eq!(stats.access_count, 2);
    assert_eq!(common::get_access_count(&pool, "inc").await, Some(2));
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    const CALLERS: i64 = 25;

    common::create_test_link(&pool, "hot", "https://example.com").await;
    let repo = Arc::new(PgShortenRepository::new(Arc::new(pool.clone())));

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..CALLERS {
        let repo = repo.clone();
        tasks.spawn(async move { repo.increment_access_count("hot").await });
    }
    while let Some(joined) = tasks.join_next().await {
        joined.unwrap().unwrap();
    }

    assert_eq!(common::get_access_count(&pool, "hot").await, Some(CALLERS));
}

#[sqlx::test]
async fn test_statement_deadline_is_persistence_error(pool: PgPool) {
    let repo = PgShortenRepository::with_statement_timeout(Arc::new(pool), Duration::ZERO);

    let result = repo.find_by_code("anything").await;

    assert!(matches!(
        result.unwrap_err(),
        RepositoryError::Persistence {
            operation: "find_by_code",
            ..
        }
    ));
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgShortenRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}
