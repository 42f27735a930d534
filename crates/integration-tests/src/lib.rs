//! Integration tests for Contact Book.
//!
//! Each test talks HTTP to a real listener. By default the server is started
//! in-process on an ephemeral port with the in-memory store; set
//! `CONTACT_BOOK_BASE_URL` to point the suite at an already running server
//! (for example one backed by `PostgreSQL`).
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p contact-book-integration-tests
//!
//! # Against a running server
//! CONTACT_BOOK_BASE_URL=http://localhost:3000 cargo test -p contact-book-integration-tests
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use contact_book_server::app;
use contact_book_server::db::MemoryContactRepository;
use contact_book_server::state::AppState;

/// Environment variable naming an external server to test against.
pub const BASE_URL_ENV: &str = "CONTACT_BOOK_BASE_URL";

/// A server under test.
pub struct TestServer {
    base_url: String,
    client: reqwest::Client,
}

impl TestServer {
    /// Start an in-process server, or attach to `CONTACT_BOOK_BASE_URL`.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start() -> Self {
        let base_url = match std::env::var(BASE_URL_ENV) {
            Ok(url) => url.trim_end_matches('/').to_owned(),
            Err(_) => spawn_in_process().await,
        };

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Whether the suite is running against an in-process server with a
    /// fresh, empty store.
    #[must_use]
    pub fn is_isolated() -> bool {
        std::env::var(BASE_URL_ENV).is_err()
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Directory holding the server's front-end files.
#[must_use]
pub fn frontend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../server/frontend")
}

async fn spawn_in_process() -> String {
    let state = AppState::new(Arc::new(MemoryContactRepository::new()));
    let router = app::router(state, &frontend_dir());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    format!("http://{addr}")
}
