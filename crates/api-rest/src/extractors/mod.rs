//! Custom Axum extractors.
//!
//! Reusable extractors that turn rejected input into [`ApiError`](crate::error::ApiError)
//! envelopes instead of axum's plain-text rejections.

pub mod context;
pub mod id_path;
pub mod pagination;
pub mod validated_json;

pub use context::RequestContext;
pub use id_path::IdPath;
pub use pagination::PageQuery;
pub use validated_json::ValidatedJson;
