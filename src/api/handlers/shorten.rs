//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/path?x=1" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored link:
///
/// ```json
/// {
///   "id": 1,
///   "url": "https://example.com/path?x=1",
///   "short_code": "6f1c2a7e-0c55-4f4e-9d0b-2f5e6b7c8d9a",
///   "created_at": "2025-01-01T00:00:00Z",
///   "updated_at": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed, 409 Conflict on a
/// uniqueness violation, 500 on storage errors.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
