//! Category endpoints.

use crate::{
    error::ApiResult,
    extractors::{IdPath, RequestContext},
    responses::Envelope,
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use serde::Serialize;
use trivia_domain::{labels, CategoryId, CategoryLabels, Question};

/// `GET /categories` payload
#[derive(Debug, Serialize)]
pub struct CategoriesPayload {
    /// id → type, ordered by id
    pub categories: CategoryLabels,
}

/// `GET /categories/{id}/questions` payload
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsPayload {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// The requested category, `{id: type}`
    pub current_category: CategoryLabels,
}

/// Category routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/:id/questions", get(category_questions))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories as an id to type map")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
) -> ApiResult<Envelope<CategoriesPayload>> {
    let categories = state.categories.labels(&ctx).await?;
    Ok(Envelope::ok(CategoriesPayload { categories }))
}

/// Questions of one category
///
/// An existing category without questions returns an empty list.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions in the category"),
        (status = 404, description = "Unknown category")
    )
)]
pub async fn category_questions(
    State(state): State<AppState>,
    RequestContext(ctx): RequestContext,
    IdPath(id): IdPath<CategoryId>,
) -> ApiResult<Envelope<CategoryQuestionsPayload>> {
    let result = state.questions.by_category(&ctx, id).await?;

    Ok(Envelope::ok(CategoryQuestionsPayload {
        total_questions: result.questions.len(),
        current_category: labels([&result.category]),
        questions: result.questions,
    }))
}
