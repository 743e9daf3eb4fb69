//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::with_default_scheme;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Increment its access count with a single atomic statement
/// 3. Return 307 Temporary Redirect to the stored URL (`http://` is
///    prepended when the stored URL has no scheme)
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.link_service.resolve_redirect(&code).await?;
    Ok(Redirect::temporary(&with_default_scheme(&url)))
}
