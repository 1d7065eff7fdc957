//! Process-local store for local development and tests

use crate::contract::{Contact, ContactId, ContactPatch, NewContact};
use crate::domain::{ContactStore, StoreError};
use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

/// Contacts kept in insertion order, ids are random UUIDs
#[derive(Default)]
pub struct InMemoryContactStore {
    rows: RwLock<Vec<Contact>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn select_all(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.rows.read().clone())
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        let created = Contact {
            id: ContactId::new(Uuid::new_v4().to_string()),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        };
        self.rows.write().push(created.clone());
        Ok(created)
    }

    async fn select_one(&self, id: &ContactId) -> Result<Option<Contact>, StoreError> {
        Ok(self.rows.read().iter().find(|c| &c.id == id).cloned())
    }

    async fn update(
        &self,
        id: &ContactId,
        patch: &ContactPatch,
    ) -> Result<Vec<Contact>, StoreError> {
        let mut rows = self.rows.write();
        Ok(rows
            .iter_mut()
            .filter(|c| &c.id == id)
            .map(|c| {
                patch.apply_to(c);
                c.clone()
            })
            .collect())
    }

    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        self.rows.write().retain(|c| &c.id != id);
        Ok(())
    }
}
