//! Contacts Service Module
//!
//! CRUD over a single contacts table held by a hosted database. Handlers
//! validate input, issue exactly one store call and render a JSON envelope.

// Public exports
pub mod contract;
pub use contract::{Contact, ContactDraft, ContactId, ContactPatch, ContactsError, NewContact};

pub mod module;
pub use module::ContactsServiceModule;

pub mod config;
pub use config::Config;

pub mod api;
pub mod domain;
pub mod infra;
