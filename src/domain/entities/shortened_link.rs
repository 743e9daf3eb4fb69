//! Shortened link entity representing a short code to URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short code mapping with its access counter.
///
/// `id` and `short_code` never change after creation. `access_count` only
/// grows, one step per resolved redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortenedLink {
    /// Creates a new ShortenedLink instance.
    pub fn new(
        id: i64,
        url: String,
        short_code: String,
        access_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            url,
            short_code,
            access_count,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the URL was changed after the link was created.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortenedLink {
    pub url: String,
    pub short_code: String,
}
