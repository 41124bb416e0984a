//! API route configuration.

use crate::api::handlers::{
    create_link_handler, get_link_handler, health_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /tinyurls`      - List all links
/// - `POST /tinyurls`      - Create a link
/// - `GET  /tinyurls/{id}` - Fetch one link by id
/// - `GET  /health`        - Storage health check
///
/// Any other method on these paths is answered with 405 Method Not Allowed.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tinyurls",
            get(list_links_handler).post(create_link_handler),
        )
        .route("/tinyurls/{id}", get(get_link_handler))
        .route("/health", get(health_handler))
}
