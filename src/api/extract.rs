//! Request extractors.

use axum::{
    extract::{FromRef, FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// JSON body extractor with a strict content type and a bounded read.
///
/// Unlike [`axum::Json`], every rejection is a 400 [`AppError::Validation`]:
///
/// - `Content-Type` is missing or not `application/json`
/// - the body is larger than [`AppState::max_body_bytes`]
/// - the body is not valid JSON for `T`
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::bad_request(
                "Content-Type must be application/json",
                json!({ "content_type": content_type(req.headers()) }),
            ));
        }

        let limit = AppState::from_ref(state).max_body_bytes;

        let bytes = axum::body::to_bytes(req.into_body(), limit)
            .await
            .map_err(|_| {
                AppError::bad_request(
                    "Request body is too large or unreadable",
                    json!({ "max_body_bytes": limit }),
                )
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::bad_request("Malformed JSON body", json!({ "reason": e.to_string() }))
        })?;

        Ok(JsonBody(value))
    }
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

/// Accepts `application/json`, ignoring parameters such as `charset`.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    content_type(headers)
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}
