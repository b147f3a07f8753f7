//! HTTP middleware components.
//!
//! - Request ID propagation
//! - Request logging
//! - JSON rendering of router-level errors

pub mod error_handler;
pub mod logging;
pub mod request_id;

pub use error_handler::json_error_responses;
pub use logging::logging_middleware;
pub use request_id::{request_id_middleware, RequestId};
