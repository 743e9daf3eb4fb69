//! DTO for the link update endpoint.

use serde::Deserialize;
use validator::Validate;

use super::shorten::MAX_URL_LENGTH;

/// Request body for `PATCH /shorten/{code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New destination URL for this link.
    #[validate(length(min = 1, max = MAX_URL_LENGTH))]
    pub url: String,
}
