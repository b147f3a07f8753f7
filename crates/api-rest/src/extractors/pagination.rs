//! Pagination extractor.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use trivia_common::PaginationParams;

/// Query parameters for pagination
#[derive(Debug, Deserialize)]
struct PageParams {
    /// Raw page number; parsed leniently
    #[serde(default)]
    page: Option<String>,
}

impl PageParams {
    /// Requested page, 1 when missing or not an integer, raised to at least 1
    fn page_number(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map_or(1, |page| page.clamp(1, i64::from(u32::MAX)) as u32)
    }
}

/// `?page=N` at the fixed page size
///
/// A missing page, or one that is not an integer, means page 1. Numbers
/// below 1 are raised to 1.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery(pub PaginationParams);

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;

        Ok(Self(PaginationParams::page(query.page_number())))
    }
}
