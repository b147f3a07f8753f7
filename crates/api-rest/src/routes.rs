//! HTTP route handlers.
//!
//! The route table is built once at startup from these modules.

pub mod categories;
pub mod health;
pub mod openapi;
pub mod questions;
pub mod quizzes;

use crate::state::AppState;
use axum::Router;

/// All trivia routes plus health checks
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(categories::routes())
        .merge(questions::routes())
        .merge(quizzes::routes())
}
