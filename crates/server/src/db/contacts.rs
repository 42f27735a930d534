//! `PostgreSQL` contact repository.
//!
//! Queries are built at runtime with `sqlx::query_as` so the crate compiles
//! without a live database.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use contact_book_core::{Contact, ContactId, Email, NewContact};

use super::{ContactRepository, RepositoryError};

/// Repository for contact database operations.
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: ContactId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

impl TryFrom<ContactRow> for Contact {
    type Error = RepositoryError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email,
            phone: row.phone,
        })
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn list_all(&self) -> Result<Vec<Contact>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, first_name, last_name, email, phone
            FROM contacts
            ORDER BY created_at, id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    async fn create(&self, fields: NewContact) -> Result<Contact, RepositoryError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r"
            INSERT INTO contacts (id, first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, email, phone
            ",
        )
        .bind(ContactId::generate())
        .bind(fields.first_name())
        .bind(fields.last_name())
        .bind(fields.email().as_str())
        .bind(fields.phone())
        .fetch_one(&self.pool)
        .await?;

        Contact::try_from(row)
    }

    async fn update(
        &self,
        id: ContactId,
        fields: NewContact,
    ) -> Result<Option<Contact>, RepositoryError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r"
            UPDATE contacts
            SET first_name = $2,
                last_name = $3,
                email = $4,
                phone = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone
            ",
        )
        .bind(id)
        .bind(fields.first_name())
        .bind(fields.last_name())
        .bind(fields.email().as_str())
        .bind(fields.phone())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Contact::try_from).transpose()
    }

    async fn delete(&self, id: ContactId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use contact_book_core::ContactInput;

    fn ana() -> NewContact {
        ContactInput {
            first_name: Some("Ana".to_string()),
            last_name: Some("Lee".to_string()),
            email: Some("a@b.co".to_string()),
            phone: Some("555".to_string()),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_row_with_bad_email_is_corruption() {
        let row = ContactRow {
            id: ContactId::generate(),
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            email: "not-an-email".to_string(),
            phone: "555".to_string(),
        };

        let err = Contact::try_from(row).unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }

    async fn connect() -> PgContactRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.unwrap();
        crate::db::MIGRATOR.run(&pool).await.unwrap();
        PgContactRepository::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a scratch PostgreSQL database"]
    async fn test_postgres_lifecycle() {
        let repo = connect().await;

        let created = repo.create(ana()).await.unwrap();
        let listed = repo.list_all().await.unwrap();
        assert!(listed.contains(&created));

        let anna = ContactInput {
            first_name: Some("Anna".to_string()),
            ..ContactInput::from(created.clone())
        }
        .validate()
        .unwrap();
        let updated = repo.update(created.id, anna).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, "Anna");

        repo.delete(created.id).await.unwrap();
        repo.delete(created.id).await.unwrap();
        let listed = repo.list_all().await.unwrap();
        assert!(listed.iter().all(|c| c.id != created.id));

        assert!(repo.update(created.id, ana()).await.unwrap().is_none());
    }
}
