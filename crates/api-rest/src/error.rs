//! HTTP error handling and conversion.
//!
//! Every failure leaves the API as the same envelope,
//! `{success: false, status, error, message, details?}`, where `status`
//! repeats the transport status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use trivia_application::ApplicationError;

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Application layer error
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Malformed body or query string
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Well-formed request that cannot be acted on
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Unknown route or resource
    #[error("Resource not found")]
    NotFound,

    /// Known route, wrong method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Handler did not finish within the request timeout
    #[error("Request timed out")]
    RequestTimeout,

    /// Internal server error
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Application(err) => StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Application(err) => err.error_code(),
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unprocessable(_) => "UNPROCESSABLE",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::RequestTimeout => "REQUEST_TIMEOUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message for the status code
    pub fn message(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::REQUEST_TIMEOUT => "request timeout",
            StatusCode::UNPROCESSABLE_ENTITY => "Request unprocessable",
            _ => "Internal server error",
        }
    }

    /// Detail safe to show clients; storage failures stay in the logs
    fn details(&self) -> Option<String> {
        match self {
            Self::Application(ApplicationError::Internal(_)) | Self::Internal(_) => None,
            Self::Application(err) => Some(err.detail().to_string()),
            Self::BadRequest(detail) | Self::Unprocessable(detail) => Some(detail.clone()),
            Self::NotFound | Self::MethodNotAllowed | Self::RequestTimeout => None,
        }
    }
}

/// Standardized error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Transport status code
    pub status: u16,

    /// Error code
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.as_u16(),
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.error, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let body = ErrorResponse::new(status, self.error_code(), self.message())
            .with_details(self.details());

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_errors_keep_their_status() {
        let cases = [
            (ApplicationError::NotFound("q".into()), 404, "resource not found"),
            (ApplicationError::Unprocessable("q".into()), 422, "Request unprocessable"),
            (ApplicationError::BadRequest("q".into()), 400, "Bad Request"),
            (ApplicationError::Internal("q".into()), 500, "Internal server error"),
        ];

        for (err, status, message) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status_code().as_u16(), status);
            assert_eq!(api.message(), message);
        }
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = ApiError::from(ApplicationError::Internal("password=hunter2".into()));
        assert!(err.details().is_none());

        let err = ApiError::from(ApplicationError::NotFound("question 7".into()));
        assert_eq!(err.details().as_deref(), Some("question 7"));
    }

    #[test]
    fn test_router_level_errors() {
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::RequestTimeout.status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(ApiError::RequestTimeout.message(), "request timeout");
        assert!(ApiError::RequestTimeout.details().is_none());
    }

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse::new(StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED", "method not allowed");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["status"], 405);
        assert!(json.get("details").is_none());
    }
}
