//! Common utilities shared by the trivia API crates.
//!
//! This crate provides:
//! - Pagination (fixed ten-item pages)
//! - Layered configuration loading
//! - Telemetry (tracing subscriber setup)

pub mod config;
pub mod pagination;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, DatabaseConfig, QuizConfig, ServerConfig, TelemetryConfig};
pub use pagination::{PaginatedResult, PaginationParams, QUESTIONS_PER_PAGE};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
