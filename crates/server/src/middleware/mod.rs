//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, added in `main`)
//! 2. CORS (any origin)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (add unique ID to each request and its span)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
