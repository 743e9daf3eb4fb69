//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgShortenRepository;

/// Link service backed by PostgreSQL, as wired by the server.
pub type PgLinkService = LinkService<PgShortenRepository>;

/// Application state cloned into each request.
///
/// Holds no per-request mutable data; the only shared resource is the
/// connection pool inside the repository.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<PgLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<PgLinkService>) -> Self {
        Self { link_service }
    }
}
