//! Shared store doubles for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use contacts_service::contract::{Contact, ContactId, ContactPatch, NewContact};
use contacts_service::domain::{ContactStore, StoreError};
use contacts_service::infra::storage::InMemoryContactStore;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps the in-memory store and counts every call that reaches it
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryContactStore,
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContactStore for RecordingStore {
    async fn select_all(&self) -> Result<Vec<Contact>, StoreError> {
        self.record();
        self.inner.select_all().await
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        self.record();
        self.inner.insert(contact).await
    }

    async fn select_one(&self, id: &ContactId) -> Result<Option<Contact>, StoreError> {
        self.record();
        self.inner.select_one(id).await
    }

    async fn update(
        &self,
        id: &ContactId,
        patch: &ContactPatch,
    ) -> Result<Vec<Contact>, StoreError> {
        self.record();
        self.inner.update(id, patch).await
    }

    async fn delete(&self, id: &ContactId) -> Result<(), StoreError> {
        self.record();
        self.inner.delete(id).await
    }
}

/// Every call fails with the same store message
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::new(self.message.clone()))
    }
}

#[async_trait]
impl ContactStore for FailingStore {
    async fn select_all(&self) -> Result<Vec<Contact>, StoreError> {
        self.fail()
    }

    async fn insert(&self, _contact: &NewContact) -> Result<Contact, StoreError> {
        self.fail()
    }

    async fn select_one(&self, _id: &ContactId) -> Result<Option<Contact>, StoreError> {
        self.fail()
    }

    async fn update(
        &self,
        _id: &ContactId,
        _patch: &ContactPatch,
    ) -> Result<Vec<Contact>, StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: &ContactId) -> Result<(), StoreError> {
        self.fail()
    }
}

pub fn new_contact(name: &str, email: &str, phone: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}
