//! Repository trait for short link data access.

use crate::domain::entities::{NewShortenedLink, ShortenedLink};
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// Repository interface for the `shorten` table.
///
/// Every operation that targets a short code reports a missing row as
/// [`RepositoryError::NotFound`], for reads and writes alike.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_shorten.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenRepository: Send + Sync {
    /// Inserts a new link and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ConstraintViolation`] if the short code (or,
    /// when enforced, the URL) already exists.
    ///
    /// Returns [`RepositoryError::Persistence`] on any other storage failure.
    async fn create(&self, new_link: NewShortenedLink) -> Result<ShortenedLink, RepositoryError>;

    /// Finds a link by exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row matches.
    async fn find_by_code(&self, code: &str) -> Result<ShortenedLink, RepositoryError>;

    /// Finds a link by short code for statistics, including its access count.
    ///
    /// Reading statistics does not increment the counter.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row matches.
    async fn find_by_code_with_access_count(
        &self,
        code: &str,
    ) -> Result<ShortenedLink, RepositoryError>;

    /// Removes a link permanently.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the statement affected no rows.
    async fn delete(&self, code: &str) -> Result<(), RepositoryError>;

    /// Replaces the URL of a link and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row matches.
    /// Returns [`RepositoryError::ConstraintViolation`] if URL uniqueness is
    /// enforced and another link already uses `url`.
    async fn update(&self, code: &str, url: &str) -> Result<ShortenedLink, RepositoryError>;

    /// Adds one to the access counter in a single statement.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the statement affected no rows.
    async fn increment_access_count(&self, code: &str) -> Result<(), RepositoryError>;

    /// Round-trips a trivial query to check storage connectivity.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
