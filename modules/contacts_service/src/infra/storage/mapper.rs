//! Conversions between store rows and contract models

use super::entity::{ContactRow, InsertRow, PatchRow};
use crate::contract::{Contact, ContactId, ContactPatch, NewContact};
use crate::domain::StoreError;

impl TryFrom<ContactRow> for Contact {
    type Error = StoreError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        let id = match row.id {
            serde_json::Value::String(id) => id,
            serde_json::Value::Number(id) => id.to_string(),
            other => {
                return Err(StoreError::new(format!(
                    "unsupported contact id in store response: {}",
                    other
                )))
            }
        };

        Ok(Self {
            name: required_column(&id, "name", row.name)?,
            email: required_column(&id, "email", row.email)?,
            phone: required_column(&id, "phone", row.phone)?,
            id: ContactId::new(id),
        })
    }
}

fn required_column(id: &str, column: &str, value: Option<String>) -> Result<String, StoreError> {
    value.ok_or_else(|| {
        tracing::warn!(id, column, "store row has a null column");
        StoreError::new(format!("contact {} has no {} in store response", id, column))
    })
}

impl<'a> From<&'a NewContact> for InsertRow<'a> {
    fn from(contact: &'a NewContact) -> Self {
        Self {
            name: &contact.name,
            email: &contact.email,
            phone: &contact.phone,
        }
    }
}

impl<'a> From<&'a ContactPatch> for PatchRow<'a> {
    fn from(patch: &'a ContactPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            email: patch.email.as_deref(),
            phone: patch.phone.as_deref(),
        }
    }
}

/// Convert a batch of rows, failing on the first malformed one
pub fn rows_to_contacts(rows: Vec<ContactRow>) -> Result<Vec<Contact>, StoreError> {
    rows.into_iter().map(Contact::try_from).collect()
}
