//! Domain service - one store call per operation

use super::repository::{ContactStore, StoreError};
use super::validation::{validate_draft, validate_patch};
use crate::contract::{Contact, ContactDraft, ContactId, ContactPatch, ContactsError};
use std::sync::Arc;

impl From<StoreError> for ContactsError {
    fn from(err: StoreError) -> Self {
        ContactsError::Store {
            message: err.message,
        }
    }
}

/// Domain service for contact management
pub struct Service {
    store: Arc<dyn ContactStore>,
}

impl Service {
    /// Create a new service instance
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// List every contact
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ContactsError> {
        Ok(self.store.select_all().await?)
    }

    /// Validate and insert a new contact
    ///
    /// Validation runs before the store is contacted, so a rejected draft
    /// never causes a write.
    pub async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, ContactsError> {
        let contact = validate_draft(draft)?;
        let created = self.store.insert(&contact).await?;

        tracing::info!(contact_id = %created.id, "contact created");
        Ok(created)
    }

    /// Fetch one contact
    ///
    /// Every store failure collapses to `NotFound`; the store's own message is
    /// only logged.
    pub async fn get_contact(&self, id: &ContactId) -> Result<Contact, ContactsError> {
        match self.store.select_one(id).await {
            Ok(Some(contact)) => Ok(contact),
            Ok(None) => Err(ContactsError::not_found(id.as_str())),
            Err(err) => {
                tracing::debug!(contact_id = %id, error = %err, "contact lookup failed");
                Err(ContactsError::not_found(id.as_str()))
            }
        }
    }

    /// Overwrite the present fields of a contact
    pub async fn update_contact(
        &self,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, ContactsError> {
        validate_patch(&patch)?;

        self.store
            .update(id, &patch)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ContactsError::not_found(id.as_str()))
    }

    /// Delete a contact; deleting a missing id succeeds
    pub async fn delete_contact(&self, id: &ContactId) -> Result<(), ContactsError> {
        self.store.delete(id).await?;

        tracing::info!(contact_id = %id, "contact deleted");
        Ok(())
    }
}
