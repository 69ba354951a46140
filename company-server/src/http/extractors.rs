//! Custom Axum extractors
//!
//! Each one rejects with a 422 body instead of axum's plain-text default.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::models::{CompanyPayload, FieldError, ListParams, LocSegment, ValidationErrors};

/// Extract and validate an integer company id from the path
pub struct CompanyId(pub i64);

impl<S> FromRequestParts<S> for CompanyId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let loc = || -> Vec<LocSegment> { vec!["path".into(), "company_id".into()] };

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ValidationErrors::single(FieldError::missing(loc())))?;

        let id: i64 = raw
            .parse()
            .map_err(|_| ValidationErrors::single(FieldError::int_parsing(loc(), &raw)))?;

        Ok(Self(id))
    }
}

/// Extract `skip`/`limit` from the query string
pub struct ListQuery(pub ListParams);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params: HashMap<String, String> = Query::from_request_parts(parts, state)
            .await
            .map(|Query(params)| params)
            .unwrap_or_default();

        let page = ListParams::parse(
            params.get("skip").map(String::as_str),
            params.get("limit").map(String::as_str),
        )?;

        Ok(Self(page))
    }
}

/// Extract and validate a company create/update body
pub struct CompanyJson(pub CompanyPayload);

impl<S> FromRequest<S> for CompanyJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        CompanyPayload::from_json_bytes(&body)
            .map(Self)
            .map_err(|errors| ApiError::from(errors).into_response())
    }
}
