//! DTO for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortenedLink;

/// A link with its access counter, returned by `GET /shorten/{code}/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub access_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortenedLink> for StatsResponse {
    fn from(link: ShortenedLink) -> Self {
        Self {
            id: link.id,
            url: link.url,
            short_code: link.short_code,
            access_count: link.access_count,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}
