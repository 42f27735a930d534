//! In-process contact repository.
//!
//! Keeps contacts in insertion order behind a `RwLock`. Used by the test
//! suites and by `STORE_BACKEND=memory` for running without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use contact_book_core::{Contact, ContactId, NewContact};

use super::{ContactRepository, RepositoryError};

/// Contact repository backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryContactRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn list_all(&self) -> Result<Vec<Contact>, RepositoryError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn create(&self, fields: NewContact) -> Result<Contact, RepositoryError> {
        let contact = Contact::from_new(ContactId::generate(), fields);
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }

    async fn update(
        &self,
        id: ContactId,
        fields: NewContact,
    ) -> Result<Option<Contact>, RepositoryError> {
        let mut contacts = self.contacts.write().await;
        let Some(contact) = contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        contact.replace_fields(fields);
        Ok(Some(contact.clone()))
    }

    async fn delete(&self, id: ContactId) -> Result<(), RepositoryError> {
        self.contacts.write().await.retain(|c| c.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use contact_book_core::ContactInput;

    fn input(first: &str, email: &str) -> NewContact {
        ContactInput {
            first_name: Some(first.to_string()),
            last_name: Some("Lee".to_string()),
            email: Some(email.to_string()),
            phone: Some("555".to_string()),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let repo = MemoryContactRepository::new();
        let a = repo.create(input("Ana", "a@b.co")).await.unwrap();
        let b = repo.create(input("Ana", "a@b.co")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = MemoryContactRepository::new();
        let a = repo.create(input("Ana", "a@b.co")).await.unwrap();
        let b = repo.create(input("Ben", "ben@b.co")).await.unwrap();
        let c = repo.create(input("Cy", "cy@b.co")).await.unwrap();

        let ids: Vec<_> = repo.list_all().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = MemoryContactRepository::new();
        let created = repo.create(input("Ana", "a@b.co")).await.unwrap();

        let updated = repo
            .update(created.id, input("Anna", "anna@b.co"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, "Anna");
        assert_eq!(updated.email.as_str(), "anna@b.co");

        assert_eq!(repo.list_all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_collection_unchanged() {
        let repo = MemoryContactRepository::new();
        let created = repo.create(input("Ana", "a@b.co")).await.unwrap();

        let result = repo
            .update(ContactId::generate(), input("Anna", "anna@b.co"))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(repo.list_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete_is_silent_for_missing_ids() {
        let repo = MemoryContactRepository::new();
        let created = repo.create(input("Ana", "a@b.co")).await.unwrap();

        repo.delete(ContactId::generate()).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        repo.delete(created.id).await.unwrap();
        repo.delete(created.id).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
