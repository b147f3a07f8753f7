//! Application Services
//!
//! Use-case orchestration over the repository ports. Each service owns
//! `Arc<dyn Port>` handles so the HTTP layer can share one instance across
//! requests, and every call carries a [`ServiceContext`] for tracing.

mod category;
mod question;
mod quiz;

pub use category::*;
pub use question::*;
pub use quiz::*;

/// Service context for request handling
#[derive(Debug, Clone)]
pub struct ServiceContext {
    /// Request correlation ID for tracing
    pub correlation_id: String,
}

impl ServiceContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
        }
    }
}
