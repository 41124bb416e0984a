//! Error types shared across layers.
//!
//! - [`StoreError`] is what a [`crate::domain::repositories::LinkRepository`] reports.
//! - [`AppError`] is what services and handlers return; it renders itself as a
//!   JSON error response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::utils::db_error::is_unique_violation_on_slug;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Wire representation of an error.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Failure reported by a link store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slug is already taken by another link.
    #[error("slug '{0}' is already in use")]
    DuplicateSlug(String),

    /// Any other I/O or storage fault.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_slug(&e) {
            // The conflicting value is not reported back by the driver.
            return StoreError::DuplicateSlug(String::new());
        }

        StoreError::Storage(e.to_string())
    }
}

/// Application-level error, mapped to an HTTP status in [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts to the client-facing error payload.
    ///
    /// Internal errors are reduced to a generic message with no details.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateSlug(slug) => {
                AppError::internal("Unresolved slug collision", json!({ "slug": slug }))
            }
            StoreError::Storage(reason) => {
                AppError::internal("Storage error", json!({ "reason": reason }))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        AppError::bad_request("Invalid request", json!({ "fields": fields }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details } = &self {
            tracing::error!(%details, "{}", message);
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
