//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Contact> for ContactDto {
    fn from(contact: contract::Contact) -> Self {
        Self {
            id: contact.id.into_inner(),
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

impl From<CreateContactRequest> for contract::ContactDraft {
    fn from(req: CreateContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

impl From<UpdateContactRequest> for contract::ContactPatch {
    fn from(req: UpdateContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}
