//! Contact input and its required-field validation.

use serde::Deserialize;

use crate::errors::domain::{DomainError, FieldErrors};

/// The editable fields of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Phone,
    Email,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Phone,
        ContactField::Email,
    ];

    /// Wire name, matching the request/response JSON keys.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }

    pub const fn required_message(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First name is required.",
            ContactField::LastName => "Last name is required.",
            ContactField::Phone => "Phone is required.",
            ContactField::Email => "Email is required.",
        }
    }
}

/// Field values for creating or overwriting a contact.
///
/// Missing JSON keys deserialize to empty strings so that they surface as
/// field errors rather than as a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    /// Every field error at once, empty when the input is acceptable.
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in ContactField::ALL {
            if self.get(field).is_empty() {
                errors.insert(field.as_str(), field.required_message());
            }
        }
        errors
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidFields(errors))
        }
    }
}

/// Validate a single email for the availability check.
pub fn require_email(email: &str) -> Result<(), DomainError> {
    if email.is_empty() {
        let mut errors = FieldErrors::new();
        errors.insert(
            ContactField::Email.as_str(),
            ContactField::Email.required_message(),
        );
        return Err(DomainError::InvalidFields(errors));
    }
    Ok(())
}
