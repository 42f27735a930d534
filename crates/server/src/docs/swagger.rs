//! Swagger UI page generation.
//!
//! `SwaggerUi` renders a complete HTML page that loads Swagger UI from a CDN
//! and points it at the JSON document served next to it.
//!
//! ```rust,ignore
//! let swagger = SwaggerUi::new("/api-docs", "Contact API");
//!
//! // HTML for GET /api-docs
//! let html = swagger.html();
//!
//! // Where the page fetches the OpenAPI document from
//! assert_eq!(swagger.spec_path(), "/api-docs/openapi.json");
//! ```

/// Swagger UI configuration and HTML generation.
#[derive(Debug, Clone)]
pub struct SwaggerUi {
    /// Base path where Swagger UI is served (e.g., "/api-docs").
    path: String,
    /// Title for the HTML page.
    title: String,
    /// Swagger UI version to use from CDN.
    swagger_version: String,
}

impl SwaggerUi {
    /// Create a new Swagger UI configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - The base URL path where Swagger UI will be served
    /// * `api_title` - Title of the documented API
    #[must_use]
    pub fn new(path: impl Into<String>, api_title: &str) -> Self {
        Self {
            path: path.into(),
            title: format!("{api_title} - Swagger UI"),
            swagger_version: "5.18.2".to_string(),
        }
    }

    /// Get the base path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the path for the OpenAPI JSON document.
    #[must_use]
    pub fn spec_path(&self) -> String {
        format!("{}/openapi.json", self.path.trim_end_matches('/'))
    }

    /// Generate the HTML for Swagger UI.
    #[must_use]
    pub fn html(&self) -> String {
        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui.css" />
    <style>
        body {{
            margin: 0;
            background: #fafafa;
        }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {{
            window.ui = SwaggerUIBundle({{
                url: '{spec_path}',
                dom_id: '#swagger-ui',
                deepLinking: true,
                docExpansion: 'list',
                presets: [SwaggerUIBundle.presets.apis],
            }});
        }};
    </script>
</body>
</html>"##,
            title = html_escape(&self.title),
            version = self.swagger_version,
            spec_path = self.spec_path(),
        )
    }
}

/// Simple HTML escape for the page title.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
