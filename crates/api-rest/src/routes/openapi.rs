//! OpenAPI document.

use crate::routes::{categories, health, questions, quizzes};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        description = "Trivia questions, categories and quizzes",
        license(name = "MIT"),
    ),
    paths(
        health::health,
        health::ready,
        categories::list_categories,
        categories::category_questions,
        questions::list_questions,
        questions::get_question,
        questions::delete_question,
        questions::create_question,
        questions::search_questions,
        quizzes::next_quiz_question,
    ),
    components(schemas(
        health::HealthResponse,
        health::ReadinessResponse,
        health::ReadinessChecks,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "categories", description = "Question categories"),
        (name = "questions", description = "Question listing, search and management"),
        (name = "quizzes", description = "Quiz play"),
    )
)]
pub struct ApiDoc;

/// Route serving the document as JSON
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
