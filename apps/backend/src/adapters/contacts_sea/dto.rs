//! DTOs for contacts_sea adapter.

use crate::domain::contact::ContactFields;

/// DTO for inserting a new contact row.
#[derive(Debug, Clone)]
pub struct ContactCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl From<ContactFields> for ContactCreate {
    fn from(fields: ContactFields) -> Self {
        Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone: fields.phone,
            email: fields.email,
        }
    }
}

/// DTO for overwriting every editable column of an existing contact.
#[derive(Debug, Clone)]
pub struct ContactUpdate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl ContactUpdate {
    pub fn new(id: i64, fields: ContactFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone: fields.phone,
            email: fields.email,
        }
    }
}
