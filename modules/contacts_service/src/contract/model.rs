//! Contract models for the contacts service

use std::fmt;

/// Opaque contact identifier assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A persisted contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned identifier, never client-supplied
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Unvalidated creation input as supplied by a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Validated creation input; every field is non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Partial update; present fields replace the stored values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Apply the present fields onto an existing contact
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(name) = &self.name {
            contact.name = name.clone();
        }
        if let Some(email) = &self.email {
            contact.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            contact.phone = phone.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_present_fields() {
        let mut contact = Contact {
            id: ContactId::new("7"),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "123".to_string(),
        };
        let patch = ContactPatch {
            phone: Some("999".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut contact);

        assert_eq!(contact.phone, "999");
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.id.as_str(), "7");
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ContactPatch::default().is_empty());
        assert!(!ContactPatch {
            email: Some("x@y.z".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
