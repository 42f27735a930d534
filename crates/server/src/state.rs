//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::ContactRepository;

/// Application state shared across all handlers.
///
/// Cheaply cloneable. Holds the contact repository chosen at startup; handlers
/// keep nothing between requests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    contacts: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Create a new application state around a contact repository.
    #[must_use]
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { contacts }),
        }
    }

    /// Get the contact repository.
    #[must_use]
    pub fn contacts(&self) -> &dyn ContactRepository {
        self.inner.contacts.as_ref()
    }
}
