//! Stand-in repository for a store that could not be opened.
//!
//! Installed when `DATABASE_URL` is missing or malformed so the server still
//! listens; every contact operation fails with [`RepositoryError::Unavailable`].

use async_trait::async_trait;

use contact_book_core::{Contact, ContactId, NewContact};

use super::{ContactRepository, RepositoryError};

/// Contact repository that fails every call.
#[derive(Debug, Clone)]
pub struct UnavailableContactRepository {
    reason: String,
}

impl UnavailableContactRepository {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> RepositoryError {
        RepositoryError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl ContactRepository for UnavailableContactRepository {
    async fn list_all(&self) -> Result<Vec<Contact>, RepositoryError> {
        Err(self.error())
    }

    async fn create(&self, _fields: NewContact) -> Result<Contact, RepositoryError> {
        Err(self.error())
    }

    async fn update(
        &self,
        _id: ContactId,
        _fields: NewContact,
    ) -> Result<Option<Contact>, RepositoryError> {
        Err(self.error())
    }

    async fn delete(&self, _id: ContactId) -> Result<(), RepositoryError> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(self.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_operation_fails() {
        let repo = UnavailableContactRepository::new("DATABASE_URL is not set");

        assert!(matches!(
            repo.list_all().await,
            Err(RepositoryError::Unavailable(ref reason)) if reason == "DATABASE_URL is not set"
        ));
        assert!(repo.delete(ContactId::generate()).await.is_err());
        assert!(repo.ping().await.is_err());
    }
}
