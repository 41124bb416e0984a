//! Handlers for short URL redirect and the root greeting.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Greeting served at `/`.
pub const ROOT_GREETING: &str = "Tinyurl";

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Errors
///
/// Returns 404 Not Found if the slug doesn't exist.
/// Returns 500 if the store cannot be read.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.link_service.resolve(&slug).await?;

    debug!(slug = %slug, "Redirecting to {}", url);

    Ok((StatusCode::FOUND, [(header::LOCATION, url)], "Redirecting..."))
}

/// Serves the fixed greeting at `/`.
pub async fn root_handler() -> &'static str {
    ROOT_GREETING
}
