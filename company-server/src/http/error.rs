//! API error types with IntoResponse
//!
//! Errors are converted to responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationErrors;

/// Detail returned when a company id has no row.
pub const COMPANY_NOT_FOUND: &str = "Company not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request failed validation (422)
    Validation(ValidationErrors),

    /// Resource not found (404)
    NotFound { detail: &'static str },

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Store fault (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn company_not_found() -> Self {
        Self::NotFound {
            detail: COMPANY_NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            Self::NotFound { detail } => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "detail": "Method Not Allowed" })),
            )
                .into_response(),
            Self::Database(e) => {
                // Log the actual error, return no detail
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
