//! Trivia REST API
//!
//! Axum-based HTTP surface for the trivia service: categories, paginated
//! question listing, search, create, delete and quiz play.
//!
//! ## Architecture
//!
//! - **app**: Router assembly and middleware stack
//! - **routes**: HTTP route handlers per resource
//! - **middleware**: Request ID, logging and router-level error rendering
//! - **extractors**: Custom Axum extractors for typed input
//! - **responses**: The success envelope
//! - **error**: HTTP error handling and conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_api_rest::{create_app, AppState};
//! use trivia_common::AppConfig;
//! use trivia_infrastructure::InMemoryTriviaStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load(None)?;
//!     let address = config.server.address();
//!     let state = AppState::in_memory(config, InMemoryTriviaStore::with_default_categories());
//!
//!     let listener = tokio::net::TcpListener::bind(address).await?;
//!     axum::serve(listener, create_app(state)).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::create_app;
pub use config::CliArgs;
pub use error::{ApiError, ApiResult};
pub use responses::Envelope;
pub use state::{AppState, Storage};
