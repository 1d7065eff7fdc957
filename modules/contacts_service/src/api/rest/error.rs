//! HTTP error mapping
//!
//! Every failure leaves the service as `{title, status, message}` with the
//! status chosen by the handler.

use crate::contract::{ContactsError, NOT_FOUND_MESSAGE};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for HTTP API failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Problem {
    /// A short, human-readable summary of the status
    #[schema(example = "Validation Failed")]
    pub title: String,

    /// The HTTP status code
    #[schema(example = 400)]
    pub status: u16,

    /// Explanation specific to this failure
    #[schema(example = "All fields are mandatory!")]
    pub message: String,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.as_u16(),
            message: String::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Map domain errors to HTTP problems
pub fn map_domain_error(error: ContactsError) -> Problem {
    match error {
        ContactsError::Validation { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Validation Failed").with_message(message)
        }
        ContactsError::NotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found").with_message(NOT_FOUND_MESSAGE)
        }
        ContactsError::Store { message } => {
            Problem::new(StatusCode::BAD_REQUEST, "Store Error").with_message(message)
        }
    }
}

impl From<ContactsError> for Problem {
    fn from(error: ContactsError) -> Self {
        map_domain_error(error)
    }
}

impl From<JsonRejection> for Problem {
    fn from(rejection: JsonRejection) -> Self {
        Problem::new(StatusCode::BAD_REQUEST, "Invalid Request Body")
            .with_message(rejection.body_text())
    }
}
