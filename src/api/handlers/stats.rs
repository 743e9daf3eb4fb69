//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link with its access count.
///
/// # Endpoint
///
/// `GET /shorten/{code}/stats`
///
/// Reading statistics is not an access and leaves the counter unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_statistics(&code).await?;
    Ok(Json(link.into()))
}
