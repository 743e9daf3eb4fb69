//! PostgreSQL implementation of the shorten repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewShortenedLink, ShortenedLink};
use crate::domain::repositories::{RepositoryError, ShortenRepository};

/// Default per-statement deadline when none is configured.
pub const DEFAULT_STATEMENT_TIMEOUT: Duration = Duration::from_secs(5);

const SELECT_COLUMNS: &str = "id, url, short_code, access_count, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ShortenRow {
    id: i64,
    url: String,
    short_code: String,
    access_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ShortenRow> for ShortenedLink {
    fn from(r: ShortenRow) -> Self {
        ShortenedLink::new(
            r.id,
            r.url,
            r.short_code,
            r.access_count,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for the `shorten` table.
///
/// Uses bound parameters for every statement. Each statement runs under a
/// deadline; when it expires the query future is dropped, which cancels it.
pub struct PgShortenRepository {
    pool: Arc<PgPool>,
    statement_timeout: Duration,
}

impl PgShortenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_statement_timeout(pool, DEFAULT_STATEMENT_TIMEOUT)
    }

    /// Creates a repository whose statements are aborted after `timeout`.
    pub fn with_statement_timeout(pool: Arc<PgPool>, timeout: Duration) -> Self {
        Self {
            pool,
            statement_timeout: timeout,
        }
    }

    /// Awaits `fut` under the statement deadline and classifies its error.
    async fn run<T, F>(
        &self,
        operation: &'static str,
        key: &str,
        fut: F,
    ) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.statement_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(RepositoryError::from_sqlx(operation, key, e)),
            Err(_) => Err(RepositoryError::timeout(operation, key, self.statement_timeout)),
        }
    }

    async fn fetch_by_code(
        &self,
        operation: &'static str,
        code: &str,
    ) -> Result<ShortenedLink, RepositoryError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM shorten WHERE short_code = $1");
        let row = self
            .run(
                operation,
                code,
                sqlx::query_as::<_, ShortenRow>(&query)
                    .bind(code)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        row.map(ShortenedLink::from)
            .ok_or_else(|| RepositoryError::not_found(code))
    }
}

#[async_trait]
impl ShortenRepository for PgShortenRepository {
    async fn create(&self, new_link: NewShortenedLink) -> Result<ShortenedLink, RepositoryError> {
        let query = format!(
            "INSERT INTO shorten (url, short_code) VALUES ($1, $2) RETURNING {SELECT_COLUMNS}"
        );
        let row = self
            .run(
                "create",
                &new_link.short_code,
                sqlx::query_as::<_, ShortenRow>(&query)
                    .bind(&new_link.url)
                    .bind(&new_link.short_code)
                    .fetch_one(self.pool.as_ref()),
            )
            .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<ShortenedLink, RepositoryError> {
        self.fetch_by_code("find_by_code", code).await
    }

    async fn find_by_code_with_access_count(
        &self,
        code: &str,
    ) -> Result<ShortenedLink, RepositoryError> {
        self.fetch_by_code("find_by_code_with_access_count", code).await
    }

    async fn delete(&self, code: &str) -> Result<(), RepositoryError> {
        let result = self
            .run(
                "delete",
                code,
                sqlx::query("DELETE FROM shorten WHERE short_code = $1")
                    .bind(code)
                    .execute(self.pool.as_ref()),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(code));
        }

        Ok(())
    }

    async fn update(&self, code: &str, url: &str) -> Result<ShortenedLink, RepositoryError> {
        let query = format!(
            "UPDATE shorten SET url = $2, updated_at = NOW() \
             WHERE short_code = $1 RETURNING {SELECT_COLUMNS}"
        );
        let row = self
            .run(
                "update",
                code,
                sqlx::query_as::<_, ShortenRow>(&query)
                    .bind(code)
                    .bind(url)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        row.map(ShortenedLink::from)
            .ok_or_else(|| RepositoryError::not_found(code))
    }

    async fn increment_access_count(&self, code: &str) -> Result<(), RepositoryError> {
        let result = self
            .run(
                "increment_access_count",
                code,
                sqlx::query(
                    "UPDATE shorten SET access_count = access_count + 1 WHERE short_code = $1",
                )
                .bind(code)
                .execute(self.pool.as_ref()),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(code));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.run(
            "ping",
            "-",
            sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(self.pool.as_ref()),
        )
        .await
        .map(|_| ())
    }
}
