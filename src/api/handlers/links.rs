//! Handlers for single-link endpoints (read, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::LinkResponse;
use crate::api::dto::update_link::UpdateLinkRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the link stored under a short code.
///
/// # Endpoint
///
/// `GET /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;
    Ok(Json(link.into()))
}

/// Points a short code at a new URL.
///
/// # Endpoint
///
/// `PATCH /shorten/{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://new-destination.com" }
/// ```
///
/// The short code and id are unchanged; `updated_at` is refreshed.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed.
/// Returns 404 Not Found if the code is unknown.
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.update_link(&code, payload.url).await?;
    Ok(Json(link.into()))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /shorten/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
