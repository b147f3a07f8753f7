//! Application builder.
//!
//! Assembles the routes, middleware and state into an Axum router.

use crate::{
    error::ApiError,
    middleware::{json_error_responses, logging_middleware, request_id_middleware},
    routes,
    state::AppState,
};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;
use trivia_common::ServerConfig;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let server = state.config.server.clone();
    let enable_openapi = state.config.api.enable_openapi;

    let mut app = Router::new()
        .merge(routes::routes())
        .fallback(not_found)
        .with_state(state);

    if enable_openapi {
        app = app.merge(routes::openapi::routes());
    }

    with_middleware(app, &server)
}

/// Wrap a router in the HTTP middleware stack
///
/// The timeout sits inside the error renderer so a timed-out request still
/// gets the JSON envelope.
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(middleware::map_response(json_error_responses))
        .layer(DefaultBodyLimit::max(server.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(build_cors_layer(server))
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware)),
        )
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Build CORS layer from configuration
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match server.allowed_origins() {
        None => cors.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        }
    }
}
