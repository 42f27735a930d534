//! Generated API documentation.
//!
//! - [`openapi::document`] - the OpenAPI 3.0 description of the contact API
//! - [`SwaggerUi`] - the interactive page served at `/api-docs`

pub mod openapi;
pub mod swagger;

pub use swagger::SwaggerUi;

/// Where the documentation UI is mounted.
pub const DOCS_PATH: &str = "/api-docs";
