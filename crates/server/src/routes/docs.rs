//! API documentation route handlers.

use axum::{Json, response::Html};

use crate::docs::openapi::{self, OpenApi};
use crate::docs::{DOCS_PATH, SwaggerUi};

/// Interactive documentation page.
///
/// GET /api-docs
pub async fn swagger_ui() -> Html<String> {
    Html(SwaggerUi::new(DOCS_PATH, openapi::API_TITLE).html())
}

/// OpenAPI document rendered by the documentation page.
///
/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<OpenApi> {
    Json(openapi::document())
}
