//! Route handlers organized by resource

pub mod companies;
pub mod health;
pub mod root;

use axum::Router;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::state::AppState;

/// `{"message": ...}` response body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// All routes, with JSON 404/405 bodies for anything unmatched
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .merge(companies::router())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn not_found() -> ApiError {
    ApiError::NotFound {
        detail: "Not Found",
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
