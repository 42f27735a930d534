//! Contact persistence.
//!
//! # Database: `PostgreSQL`
//!
//! ## Tables
//!
//! - `contacts` - One row per contact, keyed by UUID
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p contact-book-cli -- migrate
//! ```
//!
//! # Backends
//!
//! Handlers only see the [`ContactRepository`] trait. [`PgContactRepository`]
//! is used in production; [`MemoryContactRepository`] backs tests and
//! `STORE_BACKEND=memory`. [`UnavailableContactRepository`] stands in when the
//! database URL is missing or malformed.

pub mod contacts;
pub mod memory;
pub mod unavailable;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use contact_book_core::{Contact, ContactId, NewContact};

use crate::config::StoreBackend;

pub use contacts::PgContactRepository;
pub use memory::MemoryContactRepository;
pub use unavailable::UnavailableContactRepository;

/// Migrations embedded from `crates/server/migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The store could not be opened at startup.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The contact collection.
///
/// Every write takes a [`NewContact`], so records that reach a repository have
/// already been validated.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Every stored contact, oldest first.
    async fn list_all(&self) -> Result<Vec<Contact>, RepositoryError>;

    /// Store a new contact under a freshly generated id.
    async fn create(&self, fields: NewContact) -> Result<Contact, RepositoryError>;

    /// Replace all fields of an existing contact.
    ///
    /// Returns `Ok(None)` when no contact has this id.
    async fn update(
        &self,
        id: ContactId,
        fields: NewContact,
    ) -> Result<Option<Contact>, RepositoryError>;

    /// Remove a contact. Removing an id that does not exist is not an error.
    async fn delete(&self, id: ContactId) -> Result<(), RepositoryError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// Release connections. Called once during shutdown.
    async fn close(&self) {}
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool connects lazily, so an unreachable database does not prevent the
/// server from starting; use [`ContactRepository::ping`] to check it.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string cannot be parsed.
pub fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(database_url.expose_secret())
}

/// Open the configured contact repository.
///
/// Never fails: a missing or malformed `DATABASE_URL` is logged at `error` and
/// yields an [`UnavailableContactRepository`]. A `PostgreSQL` pool connects
/// lazily and its reachability is probed in the background, so the server
/// starts listening either way. Must be called inside a Tokio runtime.
#[must_use]
pub fn open_repository(store: &StoreBackend) -> Arc<dyn ContactRepository> {
    match store {
        StoreBackend::Postgres {
            database_url: Some(database_url),
        } => match create_pool(database_url) {
            Ok(pool) => {
                let repository: Arc<dyn ContactRepository> =
                    Arc::new(PgContactRepository::new(pool));

                let probe = Arc::clone(&repository);
                tokio::spawn(async move {
                    match probe.ping().await {
                        Ok(()) => tracing::info!("Connected to PostgreSQL"),
                        Err(e) => tracing::error!(
                            error = %e,
                            "Failed to connect to PostgreSQL; contact requests will fail until it is reachable"
                        ),
                    }
                });

                repository
            }
            Err(e) => {
                tracing::error!(error = %e, "DATABASE_URL is not a valid PostgreSQL URL");
                Arc::new(UnavailableContactRepository::new(format!(
                    "invalid DATABASE_URL: {e}"
                )))
            }
        },
        StoreBackend::Postgres { database_url: None } => {
            tracing::error!("DATABASE_URL is not set; contact requests will fail");
            Arc::new(UnavailableContactRepository::new("DATABASE_URL is not set"))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory contact store; contacts are lost on restart");
            Arc::new(MemoryContactRepository::new())
        }
    }
}
