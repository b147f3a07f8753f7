//! Question endpoints.

use crate::{
    error::ApiResult,
    extractors::{IdPath, PageQuery, RequestContext, ValidatedJson},
    responses::Envelope,
    state::AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use trivia_application::{CreateQuestionRequest, SearchQuestionsRequest};
use trivia_domain::{CategoryLabels, Question, QuestionId};

/// `GET /questions` payload
#[derive(Debug, Serialize)]
pub struct QuestionListPayload {
    /// At most ten questions, ordered by id
    pub questions: Vec<Question>,
    /// Size of the whole question set
    pub total_questions: u64,
    /// Every category, id → type
    pub categories: CategoryLabels,
    /// Categories of the questions on this page
    pub current_category: CategoryLabels,
}

/// `GET /questions/{id}` payload
#[derive(Debug, Serialize)]
pub struct QuestionPayload {
    pub question: Question,
}

/// `DELETE /questions/{id}` payload
#[derive(Debug, Serialize)]
pub struct DeletedPayload {
    pub question_id: QuestionId,
}

/// `POST /questions` payload
#[derive(Debug, Serialize)]
pub struct CreatedPayload {
    /// Id of the new question
    pub created: QuestionId,
    pub total_questions: u64,
}

/// `POST /questions/search` payload
#[derive(Debug, Serialize)]
pub struct SearchPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Categories of the matching questions
    pub current_category: CategoryLabels,
}

/// Question routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/searchterm", post(search_questions))
        .route("/questions/:id", get(get_question).delete(delete_question))
}

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(
        ("page" = Option<u32>, Query, description = "Page number, starting at 1; anything else means page 1")
    ),
    responses(
        (status = 200, description = "One page of questions"),
        (status = 404, description = "Page holds no questions")
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    PageQuery(pagination): PageQuery,
) -> ApiResult<Envelope<QuestionListPayload>> {
    let listing = state.questions.list_page(&ctx, pagination).await?;

    Ok(Envelope::ok(QuestionListPayload {
        total_questions: listing.page.total,
        questions: listing.page.items,
        categories: listing.categories,
        current_category: listing.current_category,
    }))
}

/// Fetch one question
#[utoipa::path(
    get,
    path = "/questions/{id}",
    tag = "questions",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "The question"),
        (status = 404, description = "Unknown question")
    )
)]
pub async fn get_question(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    IdPath(id): IdPath<QuestionId>,
) -> ApiResult<Envelope<QuestionPayload>> {
    let question = state.questions.get(&ctx, id).await?;
    Ok(Envelope::ok(QuestionPayload { question }))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 404, description = "Unknown question")
    )
)]
pub async fn delete_question(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    IdPath(id): IdPath<QuestionId>,
) -> ApiResult<Envelope<DeletedPayload>> {
    let question_id = state.questions.delete(&ctx, id).await?;
    Ok(Envelope::ok(DeletedPayload { question_id }))
}

/// Create a question
///
/// `question`, `answer`, `difficulty` and `category` are all required.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    responses(
        (status = 200, description = "Question created"),
        (status = 400, description = "Body is not JSON"),
        (status = 422, description = "Missing or invalid field")
    )
)]
pub async fn create_question(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    ValidatedJson(request): ValidatedJson<CreateQuestionRequest>,
) -> ApiResult<Envelope<CreatedPayload>> {
    let (question, total_questions) = state.questions.create(&ctx, request).await?;

    Ok(Envelope::ok(CreatedPayload {
        created: question.id,
        total_questions,
    }))
}

/// Case-insensitive search over question text
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    responses(
        (status = 200, description = "Matching questions"),
        (status = 404, description = "Nothing matched"),
        (status = 422, description = "searchTerm missing")
    )
)]
pub async fn search_questions(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    ValidatedJson(request): ValidatedJson<SearchQuestionsRequest>,
) -> ApiResult<Envelope<SearchPayload>> {
    let results = state.questions.search(&ctx, request).await?;

    Ok(Envelope::ok(SearchPayload {
        total_questions: results.questions.len(),
        questions: results.questions,
        current_category: results.current_category,
    }))
}
