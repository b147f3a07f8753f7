//! Router-level error rendering.
//!
//! The router answers a wrong method with a bodiless 405, and the timeout
//! layer answers a slow request with a bodiless 408. Both are replaced with
//! the JSON error envelope so every failure has the same shape.

use crate::error::ApiError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Replace bodiless router errors with JSON envelopes
pub async fn json_error_responses(response: Response) -> Response {
    if response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let error = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed,
        StatusCode::REQUEST_TIMEOUT => ApiError::RequestTimeout,
        _ => return response,
    };

    let mut rendered = error.into_response();
    if let Some(allow) = response.headers().get(header::ALLOW) {
        rendered.headers_mut().insert(header::ALLOW, allow.clone());
    }
    rendered
}
