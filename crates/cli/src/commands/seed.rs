//! Seed the contact table from a YAML file.
//!
//! The file is parsed and every contact validated before the database is
//! touched, so a bad entry never leaves a half-seeded table.
//!
//! ```yaml
//! contacts:
//!   - firstName: Ana
//!     lastName: Lee
//!     email: ana.lee@example.com
//!     phone: "555-0100"
//! ```

use serde::Deserialize;

use contact_book_core::{ContactInput, NewContact};
use contact_book_server::db::{ContactRepository, PgContactRepository};

use super::{CliError, connect};

#[derive(Debug, Deserialize)]
struct SeedFile {
    contacts: Vec<ContactInput>,
}

/// Outcome of a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub removed: usize,
    pub inserted: usize,
}

/// Seed contacts from `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, any contact is
/// invalid, or a database operation fails.
pub async fn run(file_path: &str, clear_existing: bool) -> Result<(), CliError> {
    let content = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|source| CliError::Io {
            path: file_path.to_owned(),
            source,
        })?;

    let contacts = parse_seed_file(&content)?;
    tracing::info!(path = %file_path, contacts = contacts.len(), "Parsed seed file");

    let pool = connect().await?;
    let repository = PgContactRepository::new(pool);

    let summary = seed_contacts(&repository, contacts, clear_existing).await?;
    tracing::info!(
        removed = summary.removed,
        inserted = summary.inserted,
        "Seeding complete!"
    );

    repository.close().await;
    Ok(())
}

/// Parse a seed file and validate every contact in it.
///
/// # Errors
///
/// Returns `CliError::Yaml` for malformed YAML and `CliError::InvalidContact`
/// (1-based index) for the first contact that fails validation.
pub fn parse_seed_file(content: &str) -> Result<Vec<NewContact>, CliError> {
    let file: SeedFile = serde_yaml::from_str(content)?;

    file.contacts
        .into_iter()
        .enumerate()
        .map(|(i, input)| {
            input
                .validate()
                .map_err(|source| CliError::InvalidContact { index: i + 1, source })
        })
        .collect()
}

/// Insert contacts, optionally deleting every existing one first.
///
/// # Errors
///
/// Returns an error if any repository operation fails.
pub async fn seed_contacts(
    repository: &dyn ContactRepository,
    contacts: Vec<NewContact>,
    clear_existing: bool,
) -> Result<SeedSummary, CliError> {
    let mut summary = SeedSummary::default();

    if clear_existing {
        for contact in repository.list_all().await? {
            repository.delete(contact.id).await?;
            summary.removed += 1;
        }
    }

    for fields in contacts {
        let contact = repository.create(fields).await?;
        tracing::debug!(contact_id = %contact.id, "Inserted contact");
        summary.inserted += 1;
    }

    Ok(summary)
}
