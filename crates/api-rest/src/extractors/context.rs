//! Service context extractor.

use crate::middleware::request_id::RequestId;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use trivia_application::ServiceContext;

/// [`ServiceContext`] carrying the request id as correlation id
#[derive(Debug, Clone)]
pub struct RequestContext(pub ServiceContext);

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let correlation_id = parts
            .extensions
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(Self(ServiceContext::new(correlation_id)))
    }
}
