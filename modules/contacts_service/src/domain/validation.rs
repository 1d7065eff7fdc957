//! Request validation for contact input

use crate::contract::{ContactDraft, ContactPatch, ContactsError, NewContact, MANDATORY_FIELDS_MESSAGE};

/// Validate creation input; all three fields must be present and non-empty
pub fn validate_draft(draft: ContactDraft) -> Result<NewContact, ContactsError> {
    match (
        non_empty(draft.name),
        non_empty(draft.email),
        non_empty(draft.phone),
    ) {
        (Some(name), Some(email), Some(phone)) => Ok(NewContact { name, email, phone }),
        _ => Err(ContactsError::validation(MANDATORY_FIELDS_MESSAGE)),
    }
}

/// Validate a partial update; present fields must be non-empty and at least one
/// field must be present
pub fn validate_patch(patch: &ContactPatch) -> Result<(), ContactsError> {
    if patch.is_empty() {
        return Err(ContactsError::validation(
            "At least one of name, email or phone must be provided",
        ));
    }

    let fields = [
        ("name", &patch.name),
        ("email", &patch.email),
        ("phone", &patch.phone),
    ];
    let empty: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| matches!(value, Some(v) if v.is_empty()))
        .map(|(field, _)| *field)
        .collect();

    if !empty.is_empty() {
        return Err(ContactsError::validation(format!(
            "Fields must not be empty: {}",
            empty.join(", ")
        )));
    }

    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
