//! Store trait for contact data access
//!
//! The store is an external collaborator; implementations live in
//! `infra/storage`. Every call is a single round trip with no retries.

use crate::contract::{Contact, ContactId, ContactPatch, NewContact};
use async_trait::async_trait;
use thiserror::Error;

/// Error reported by the store, carrying its message text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Data store client for the contacts table
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Select every contact, in the store's default order
    async fn select_all(&self) -> Result<Vec<Contact>, StoreError>;

    /// Insert one contact and return the stored row
    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError>;

    /// Select the contact with the given id
    async fn select_one(&self, id: &ContactId) -> Result<Option<Contact>, StoreError>;

    /// Overwrite the present fields of the matching contact, returning updated rows
    async fn update(&self, id: &ContactId, patch: &ContactPatch)
        -> Result<Vec<Contact>, StoreError>;

    /// Delete the matching contact; a missing id is not an error
    async fn delete(&self, id: &ContactId) -> Result<(), StoreError>;
}
