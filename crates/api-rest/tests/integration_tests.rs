//! Integration tests for REST API
//!
//! Drives the full router (middleware included) with `tower::ServiceExt::oneshot`
//! against an in-memory store seeded with the fixture data set.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    routing::get as get_route,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use trivia_api_rest::{app::with_middleware, create_app, AppState, Storage};
use trivia_common::{AppConfig, ServerConfig};
use trivia_infrastructure::InMemoryTriviaStore;
use trivia_testing::{fixtures, FailingRepository, QuestionBuilder};

// ============================================================================
// Helpers
// ============================================================================

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.quiz.seed = Some(7);
    config
}

fn app_with(store: InMemoryTriviaStore) -> Router {
    create_app(AppState::in_memory(test_config(), store))
}

fn seeded_app() -> Router {
    app_with(InMemoryTriviaStore::with_data(
        fixtures::categories(),
        fixtures::questions(),
    ))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "body: {}", body);
    assert_eq!(body["success"], false);
    assert_eq!(body["status"], expected.as_u16());
    assert_eq!(body["message"], message);
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_get_categories() {
    let app = seeded_app();
    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], 200);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_category_questions() {
    let app = seeded_app();
    let (status, body) = get(&app, "/categories/3/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![13, 14, 15]);
    assert_eq!(body["total_questions"], 3);
    assert_eq!(body["current_category"], json!({"3": "Geography"}));
}

#[tokio::test]
async fn test_unknown_category_is_404() {
    let app = seeded_app();
    let (status, body) = get(&app, "/categories/1000/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_empty_category_is_200_with_empty_list() {
    let app = app_with(InMemoryTriviaStore::with_data(
        fixtures::categories(),
        fixtures::questions_in(1),
    ));
    let (status, body) = get(&app, "/categories/6/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], 0);
}

#[tokio::test]
async fn test_non_integer_category_id_is_404() {
    let app = seeded_app();
    let (status, body) = get(&app, "/categories/science/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

// ============================================================================
// Question listing
// ============================================================================

#[tokio::test]
async fn test_get_paginated_questions() {
    let app = seeded_app();
    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body).len(), 10);
    assert_eq!(body["total_questions"], fixtures::FIXTURE_QUESTION_COUNT);
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);

    let first = &body["questions"][0];
    assert_eq!(first["id"], 2);
    assert_eq!(first["answer"], "Apollo 13");
    assert_eq!(first["category"], 5);
    assert_eq!(first["difficulty"], 4);
    assert_eq!(body["current_category"]["5"], "Entertainment");
}

#[tokio::test]
async fn test_pages_are_disjoint_and_cover_the_set() {
    let app = seeded_app();
    let (_, page1) = get(&app, "/questions?page=1").await;
    let (_, page2) = get(&app, "/questions?page=2").await;

    let first: HashSet<_> = ids(&page1).into_iter().collect();
    let second: HashSet<_> = ids(&page2).into_iter().collect();

    assert!(first.is_disjoint(&second));
    assert_eq!(first.len() + second.len(), fixtures::FIXTURE_QUESTION_COUNT);
}

#[tokio::test]
async fn test_page_beyond_data_is_404() {
    let app = seeded_app();
    let (status, body) = get(&app, "/questions?page=1000").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_page_zero_is_first_page() {
    let app = seeded_app();
    let (_, zero) = get(&app, "/questions?page=0").await;
    let (_, one) = get(&app, "/questions?page=1").await;
    assert_eq!(ids(&zero), ids(&one));
}

#[tokio::test]
async fn test_negative_page_is_first_page() {
    let app = seeded_app();
    let (status, negative) = get(&app, "/questions?page=-1").await;
    let (_, one) = get(&app, "/questions?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&negative), ids(&one));
}

#[tokio::test]
async fn test_non_integer_page_is_first_page() {
    let app = seeded_app();
    let (status, body) = get(&app, "/questions?page=two").await;
    let (_, one) = get(&app, "/questions?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), ids(&one));
}

#[tokio::test]
async fn test_empty_store_listing_is_404() {
    let app = app_with(InMemoryTriviaStore::with_default_categories());
    let (status, body) = get(&app, "/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

// ============================================================================
// Create / delete
// ============================================================================

#[tokio::test]
async fn test_create_question_then_listed_once() {
    let app = seeded_app();
    let (status, body) = post(
        &app,
        "/questions",
        json!({
            "question": "Which planet has the most moons?",
            "answer": "Saturn",
            "difficulty": 3,
            "category": 1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], fixtures::FIXTURE_QUESTION_COUNT + 1);
    let created = body["created"].as_i64().unwrap();

    let (_, page1) = get(&app, "/questions?page=1").await;
    let (_, page2) = get(&app, "/questions?page=2").await;
    let occurrences = ids(&page1)
        .into_iter()
        .chain(ids(&page2))
        .filter(|&id| id == created)
        .count();
    assert_eq!(occurrences, 1);

    let (status, body) = get(&app, &format!("/questions/{}", created)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["answer"], "Saturn");
}

#[tokio::test]
async fn test_create_accepts_numeric_strings() {
    let app = seeded_app();
    let request = QuestionBuilder::new().with_category(2).build_new();
    let (status, body) = post(
        &app,
        "/questions",
        json!({
            "question": request.question,
            "answer": request.answer,
            "difficulty": request.difficulty.to_string(),
            "category": "2"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
}

#[tokio::test]
async fn test_create_missing_any_field_is_422() {
    let app = seeded_app();
    let complete = json!({
        "question": "Who wrote Hamlet?",
        "answer": "Shakespeare",
        "difficulty": 1,
        "category": 4
    });

    for field in ["question", "answer", "difficulty", "category"] {
        let mut body = complete.clone();
        body.as_object_mut().unwrap().remove(field);

        let (status, body) = post(&app, "/questions", body).await;
        assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Request unprocessable");
    }

    let (_, listing) = get(&app, "/questions").await;
    assert_eq!(listing["total_questions"], fixtures::FIXTURE_QUESTION_COUNT);
}

#[tokio::test]
async fn test_create_non_integer_difficulty_is_422() {
    let app = seeded_app();
    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": "q", "answer": "a", "difficulty": "hard", "category": 1}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Request unprocessable");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = seeded_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_error(status, &body, StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn test_delete_then_fetch_is_404() {
    let app = seeded_app();
    let (status, body) = delete(&app, "/questions/9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question_id"], 9);

    let (status, body) = get(&app, "/questions/9").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");

    let (status, body) = delete(&app, "/questions/9").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_delete_unknown_is_404() {
    let app = seeded_app();
    let (status, body) = delete(&app, "/questions/1000").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_single_match() {
    let app = seeded_app();
    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "penicillin"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![21]);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["current_category"], json!({"1": "Science"}));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = seeded_app();
    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "TiTlE"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![5, 6]);
}

#[tokio::test]
async fn test_search_without_match_is_404() {
    let app = seeded_app();
    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "xylophone"})).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_legacy_search_path() {
    let app = seeded_app();
    let (status, body) = post(&app, "/questions/searchterm", json!({"searchTerm": "cassius"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![9]);
}

#[tokio::test]
async fn test_search_without_term_is_422() {
    let app = seeded_app();
    let (status, body) = post(&app, "/questions/search", json!({})).await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Request unprocessable");
}

// ============================================================================
// Quizzes
// ============================================================================

#[tokio::test]
async fn test_quiz_in_category() {
    let app = seeded_app();
    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previousQuestions": [20], "quizCategory": {"id": 1, "type": "Science"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let id = body["question"]["id"].as_i64().unwrap();
    assert!([21, 22].contains(&id));
    assert_eq!(body["question"]["category"], 1);
}

#[tokio::test]
async fn test_quiz_accepts_snake_case_fields() {
    let app = seeded_app();
    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previous_questions": [10], "quiz_category": {"id": "6", "type": "Sports"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 11);
}

#[tokio::test]
async fn test_quiz_until_exhausted_never_repeats() {
    let app = seeded_app();
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let (status, body) = post(
            &app,
            "/quizzes",
            json!({"previousQuestions": previous, "quizCategory": {"id": 0}}),
        )
        .await;

        if status == StatusCode::UNPROCESSABLE_ENTITY {
            assert_eq!(body["success"], false);
            assert_eq!(body["status"], 422);
            break;
        }

        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {} served twice", id);
        previous.push(id);
        assert!(previous.len() <= fixtures::FIXTURE_QUESTION_COUNT);
    }

    assert_eq!(previous.len(), fixtures::FIXTURE_QUESTION_COUNT);
}

#[tokio::test]
async fn test_quiz_unknown_category_is_422() {
    let app = seeded_app();
    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"previousQuestions": [], "quizCategory": {"id": 1000}}),
    )
    .await;
    assert_error(status, &body, StatusCode::UNPROCESSABLE_ENTITY, "Request unprocessable");
}

#[tokio::test]
async fn test_quiz_without_category_uses_all() {
    let app = seeded_app();
    let (status, body) = post(&app, "/quizzes", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["question"]["id"].is_i64());
}

// ============================================================================
// Router-level behaviour
// ============================================================================

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = seeded_app();
    let (status, body) = get(&app, "/nope").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::PUT, "/questions", None).await;
    assert_error(status, &body, StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
}

#[tokio::test(start_paused = true)]
async fn test_slow_request_times_out_with_envelope() {
    let server = ServerConfig {
        request_timeout_seconds: 1,
        ..ServerConfig::default()
    };
    let slow = Router::new().route(
        "/slow",
        get_route(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "done"
        }),
    );
    let app = with_middleware(slow, &server);

    let (status, body) = get(&app, "/slow").await;
    assert_error(status, &body, StatusCode::REQUEST_TIMEOUT, "request timeout");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = seeded_app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = seeded_app();
    let request = Request::builder()
        .uri("/categories")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = seeded_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["health"], "healthy");
    assert_eq!(body["storage"], "memory");

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
}

#[tokio::test]
async fn test_openapi_document() {
    let app = seeded_app();
    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/questions"].is_object());
    assert!(body["paths"]["/quizzes"].is_object());
}

#[tokio::test]
async fn test_openapi_can_be_disabled() {
    let mut config = test_config();
    config.api.enable_openapi = false;
    let app = create_app(AppState::in_memory(config, InMemoryTriviaStore::new()));

    let (status, _) = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_failure_is_500() {
    let state = AppState::new(
        test_config(),
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
        Storage::Memory,
    );
    let app = create_app(state);

    let (status, body) = get(&app, "/categories").await;
    assert_error(status, &body, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    assert!(body.get("details").is_none());
}
