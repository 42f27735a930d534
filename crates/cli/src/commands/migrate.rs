//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! contact-book migrate
//! ```
//!
//! Applies the migrations in `crates/server/migrations/`, which are embedded
//! into the server crate at compile time.

use contact_book_server::db::MIGRATOR;

use super::{CliError, connect};

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is missing, the database is unreachable
/// or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    pool.close().await;
    Ok(())
}
