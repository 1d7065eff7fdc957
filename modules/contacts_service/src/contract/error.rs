//! Contract error types for the contacts service
//!
//! These errors are transport-agnostic; the REST layer maps them to HTTP
//! statuses in `api::rest::error`.

use thiserror::Error;

/// Returned when any of the required creation fields is missing or empty
pub const MANDATORY_FIELDS_MESSAGE: &str = "All fields are mandatory!";

/// Returned for every lookup failure, whatever the store reported
pub const NOT_FOUND_MESSAGE: &str = "Contact not found";

/// Contacts service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactsError {
    /// Request input rejected before the store was contacted
    #[error("{message}")]
    Validation { message: String },

    /// No contact matches the identifier
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound { id: String },

    /// The store reported an error; the message is forwarded verbatim
    #[error("{message}")]
    Store { message: String },
}

impl ContactsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
