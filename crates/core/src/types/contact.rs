//! The contact record and its write-side input.
//!
//! Clients send a [`ContactInput`], in which every field is optional, so a
//! missing field is reported as a validation failure rather than a
//! deserialization error. [`ContactInput::validate`] turns it into a
//! [`NewContact`], the only value a store accepts for writes.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::email::{Email, EmailError};
use super::id::ContactId;

/// One of the four client-supplied contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl ContactField {
    /// The JSON name of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a [`ContactInput`] was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was absent or `null`.
    #[error("{0} is required")]
    Missing(ContactField),
    /// The field was present but the empty string.
    #[error("{0} cannot be empty")]
    Empty(ContactField),
    /// The email did not match the required pattern.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
}

impl Contact {
    /// Build a stored contact from validated fields and its identifier.
    #[must_use]
    pub fn from_new(id: ContactId, fields: NewContact) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// Replace every client-supplied field, keeping the identifier.
    pub fn replace_fields(&mut self, fields: NewContact) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.email = fields.email;
        self.phone = fields.phone;
    }
}

/// Request body for creating or replacing a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInput {
    /// Check every field and produce a write-ready [`NewContact`].
    ///
    /// Fields are checked in order `firstName`, `lastName`, `email`, `phone`;
    /// the first failure is returned. Values are kept exactly as sent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Missing` for an absent field,
    /// `ValidationError::Empty` for an empty one and `ValidationError::Email`
    /// when the email does not match `<local>@<domain>.<tld>`.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        let first_name = required(self.first_name, ContactField::FirstName)?;
        let last_name = required(self.last_name, ContactField::LastName)?;
        let email = required(self.email, ContactField::Email)?;
        let email = Email::parse(&email)?;
        let phone = required(self.phone, ContactField::Phone)?;

        Ok(NewContact {
            first_name,
            last_name,
            email,
            phone,
        })
    }
}

fn required(value: Option<String>, field: ContactField) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(value)
}

/// The four client-supplied fields after validation.
///
/// Only obtainable through [`ContactInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    first_name: String,
    last_name: String,
    email: Email,
    phone: String,
}

impl NewContact {
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl From<Contact> for ContactInput {
    fn from(contact: Contact) -> Self {
        Self {
            first_name: Some(contact.first_name),
            last_name: Some(contact.last_name),
            email: Some(contact.email.into_inner()),
            phone: Some(contact.phone),
        }
    }
}
