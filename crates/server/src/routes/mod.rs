//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                        - Front-end entry document
//! GET    /health                  - Liveness check
//! GET    /health/ready            - Readiness check (store reachable)
//!
//! # Contacts
//! GET    /todos                   - List contacts
//! POST   /todos                   - Create contact
//! PUT    /todos/{id}              - Replace contact fields
//! DELETE /todos/{id}              - Delete contact
//!
//! # Documentation
//! GET    /api-docs                - Swagger UI
//! GET    /api-docs/openapi.json   - OpenAPI document
//! ```
//!
//! The front-end routes are mounted in [`crate::app`] because they depend on
//! the configured front-end directory.

pub mod contacts;
pub mod docs;
pub mod health;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Create the contact CRUD router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(contacts::list).post(contacts::create))
        .route("/todos/{id}", put(contacts::update).delete(contacts::delete))
}

/// Create the API documentation router.
pub fn docs_routes() -> Router<AppState> {
    Router::new()
        .route("/api-docs", get(docs::swagger_ui))
        .route("/api-docs/", get(docs::swagger_ui))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
}

/// Create the health check router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(contact_routes())
        .merge(docs_routes())
}
