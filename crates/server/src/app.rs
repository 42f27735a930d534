//! Router assembly.
//!
//! Shared by the binary and the test suites so both exercise the same stack.

use std::path::Path;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::request_id_middleware;
use crate::routes;
use crate::state::AppState;

/// Name of the front-end entry document inside the front-end directory.
pub const INDEX_FILE: &str = "index.html";

/// Build the full application router.
///
/// `frontend_dir` is served as static files: `GET /` returns its
/// `index.html`, and any path not matched by an API route is looked up in it.
pub fn router(state: AppState, frontend_dir: &Path) -> Router {
    Router::new()
        .merge(routes::routes())
        .route_service("/", ServeFile::new(frontend_dir.join(INDEX_FILE)))
        .fallback_service(ServeDir::new(frontend_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
