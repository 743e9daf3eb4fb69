//! DTOs for link creation and retrieval endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortenedLink;

/// Upper bound on accepted URL length.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request body for `POST /shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. Shape is checked by the service.
    #[validate(length(min = 1, max = MAX_URL_LENGTH))]
    pub url: String,
}

/// JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortenedLink> for LinkResponse {
    fn from(link: ShortenedLink) -> Self {
        Self {
            id: link.id,
            url: link.url,
            short_code: link.short_code,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_fails_validation() {
        let request = ShortenRequest { url: String::new() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_oversized_url_fails_validation() {
        let request = ShortenRequest {
            url: format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH as usize)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_link_response_omits_access_count() {
        let now = Utc::now();
        let link = ShortenedLink::new(
            1,
            "https://example.com".to_string(),
            "code".to_string(),
            5,
            now,
            now,
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();
        assert_eq!(value["short_code"], "code");
        assert!(value.get("access_count").is_none());
    }
}
