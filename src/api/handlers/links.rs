//! Handlers for link endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every shortened link.
///
/// # Endpoint
///
/// `GET /api/tinyurls`
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "slug": "aB3xZ", "url": "https://example.com" }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /api/tinyurls` with `Content-Type: application/json`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a wrong content type, an unparsable or oversized
/// body, or a missing/empty URL. Returns 500 if the link cannot be stored.
pub async fn create_link_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let link = state.link_service.create_link(&url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns a single link by id.
///
/// # Endpoint
///
/// `GET /api/tinyurls/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer, 404 if no such link exists.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let id: i64 = id.parse().map_err(|_| {
        AppError::bad_request("Link id must be an integer", serde_json::json!({ "id": id }))
    })?;

    let link = state.link_service.get_link(id).await?;

    Ok(Json(link.into()))
}
