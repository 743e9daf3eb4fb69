//! Link creation, lookup, mutation, and redirect resolution.

use std::sync::Arc;

use crate::domain::entities::{NewShortenedLink, ShortenedLink};
use crate::domain::repositories::ShortenRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::is_valid_url;
use serde_json::json;

/// Service for managing shortened links.
///
/// Validates untrusted URLs, generates short codes, and delegates storage to a
/// [`ShortenRepository`]. Repository outcomes become [`AppError`]s through
/// `From<RepositoryError>`.
pub struct LinkService<R: ShortenRepository> {
    repository: Arc<R>,
}

impl<R: ShortenRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `url` under a freshly generated code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL fails the shape check; no
    /// row is written in that case.
    ///
    /// Returns [`AppError::Conflict`] on a uniqueness violation and
    /// [`AppError::Internal`] on storage failures.
    pub async fn create_short_link(&self, url: String) -> Result<ShortenedLink, AppError> {
        ensure_valid_url(&url)?;

        let new_link = NewShortenedLink {
            url,
            short_code: generate_code(),
        };

        let link = self.repository.create(new_link).await?;
        tracing::info!(short_code = %link.short_code, id = link.id, "Short link created");

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get_link(&self, code: &str) -> Result<ShortenedLink, AppError> {
        Ok(self.repository.find_by_code(code).await?)
    }

    /// Retrieves a link together with its access count.
    ///
    /// Does not count as an access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get_statistics(&self, code: &str) -> Result<ShortenedLink, AppError> {
        Ok(self.repository.find_by_code_with_access_count(code).await?)
    }

    /// Deletes a link permanently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        self.repository.delete(code).await?;
        tracing::info!(short_code = code, "Short link deleted");
        Ok(())
    }

    /// Points an existing code at a new URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new URL fails the shape check
    /// and [`AppError::NotFound`] if the code is unknown.
    pub async fn update_link(&self, code: &str, url: String) -> Result<ShortenedLink, AppError> {
        ensure_valid_url(&url)?;

        let link = self.repository.update(code, &url).await?;
        tracing::info!(short_code = code, "Short link updated");

        Ok(link)
    }

    /// Resolves a code to its target URL and records the access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown, including when
    /// the link is deleted between the lookup and the increment.
    pub async fn resolve_redirect(&self, code: &str) -> Result<String, AppError> {
        let link = self.repository.find_by_code(code).await?;
        self.repository.increment_access_count(code).await?;

        tracing::debug!(short_code = code, "Redirect resolved");
        Ok(link.url)
    }

    /// Checks that the backing store answers queries.
    pub async fn health_check(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }
}

fn ensure_valid_url(url: &str) -> Result<(), AppError> {
    if is_valid_url(url) {
        return Ok(());
    }

    Err(AppError::bad_request(
        "Invalid url format",
        json!({ "url": url }),
    ))
}
