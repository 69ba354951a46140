//! Company endpoints
//!
//! Thin adapters over [`CompanyStore`](crate::db::CompanyStore): absence
//! from the store becomes a 404 here and nowhere else.

use axum::{extract::State, routing::get, Json, Router};

use super::MessageResponse;
use crate::db::CompanyStore;
use crate::http::error::ApiError;
use crate::http::extractors::{CompanyId, CompanyJson, ListQuery};
use crate::models::Company;
use crate::state::AppState;

/// GET /companies - list companies with skip/limit
async fn list_companies(
    State(state): State<AppState>,
    ListQuery(page): ListQuery,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = state.store().list(page).await?;
    Ok(Json(companies))
}

/// GET /companies/{company_id} - get a single company
async fn get_company(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
) -> Result<Json<Company>, ApiError> {
    let company = state
        .store()
        .get(id)
        .await?
        .ok_or_else(ApiError::company_not_found)?;

    Ok(Json(company))
}

/// POST /companies - create a company
async fn create_company(
    State(state): State<AppState>,
    CompanyJson(payload): CompanyJson,
) -> Result<Json<Company>, ApiError> {
    let company = state.store().create(payload).await?;
    tracing::info!(id = company.id, "created company");
    Ok(Json(company))
}

/// PUT /companies/{company_id} - replace name and location
async fn update_company(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
    CompanyJson(payload): CompanyJson,
) -> Result<Json<Company>, ApiError> {
    let company = state
        .store()
        .update(id, payload)
        .await?
        .ok_or_else(ApiError::company_not_found)?;

    Ok(Json(company))
}

/// DELETE /companies/{company_id} - remove a company
async fn delete_company(
    State(state): State<AppState>,
    CompanyId(id): CompanyId,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store()
        .delete(id)
        .await?
        .ok_or_else(ApiError::company_not_found)?;

    tracing::info!(id, "deleted company");
    Ok(Json(MessageResponse {
        message: "Company deleted successfully",
    }))
}

/// Company routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{company_id}",
            get(get_company).put(update_company).delete(delete_company),
        )
}
