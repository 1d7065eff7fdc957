//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - the REST layer and the store client own their
//! wire shapes and convert through mappers.

pub mod error;
pub mod model;

pub use error::{ContactsError, MANDATORY_FIELDS_MESSAGE, NOT_FOUND_MESSAGE};
pub use model::{Contact, ContactDraft, ContactId, ContactPatch, NewContact};
