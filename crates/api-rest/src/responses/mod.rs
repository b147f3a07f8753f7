//! Standardized API response types.
//!
//! Successful responses are a flat envelope: `success` and `status` next to
//! the payload's own fields, e.g.
//! `{"success": true, "status": 200, "questions": [...], "total_questions": 19}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Indicates if the request was successful
    pub success: bool,

    /// Transport status code
    pub status: u16,

    /// Response payload, flattened into the envelope
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T>
where
    T: Serialize,
{
    /// Create a 200 success response
    pub fn ok(payload: T) -> Self {
        Self::with_status(StatusCode::OK, payload)
    }

    /// Create a response with an explicit status code
    pub fn with_status(status: StatusCode, payload: T) -> Self {
        Self {
            success: status.is_success(),
            status: status.as_u16(),
            payload,
        }
    }
}

impl<T> IntoResponse for Envelope<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
