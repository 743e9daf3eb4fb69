//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, get_link_handler, shorten_handler, stats_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST   /shorten`              - Create a short link
/// - `GET    /shorten/{code}`       - Read a short link
/// - `PATCH  /shorten/{code}`       - Point a short link at a new URL
/// - `DELETE /shorten/{code}`       - Delete a short link
/// - `GET    /shorten/{code}/stats` - Read a short link with its access count
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route(
            "/shorten/{code}",
            get(get_link_handler)
                .patch(update_link_handler)
                .delete(delete_link_handler),
        )
        .route("/shorten/{code}/stats", get(stats_handler))
}
