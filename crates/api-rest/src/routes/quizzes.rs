//! Quiz endpoint.

use crate::{
    error::ApiResult,
    extractors::{RequestContext, ValidatedJson},
    responses::Envelope,
    state::AppState,
};
use axum::{extract::State, routing::post, Router};
use serde::Serialize;
use trivia_application::QuizRequest;
use trivia_domain::Question;

/// `POST /quizzes` payload
#[derive(Debug, Serialize)]
pub struct QuizPayload {
    pub question: Question,
}

/// Quiz routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_quiz_question))
}

/// Serve a random question the player has not seen
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    responses(
        (status = 200, description = "Next quiz question"),
        (status = 400, description = "Body is not JSON"),
        (status = 422, description = "Unknown category or no unseen questions left")
    )
)]
pub async fn next_quiz_question(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    ValidatedJson(request): ValidatedJson<QuizRequest>,
) -> ApiResult<Envelope<QuizPayload>> {
    let question = state.quiz.next_question(&ctx, request).await?;
    Ok(Envelope::ok(QuizPayload { question }))
}
