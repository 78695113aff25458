//! Contact store functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::debug;

use crate::adapters::contacts_sea::{self as contacts_adapter, ContactCreate, ContactUpdate};
use crate::domain::contact::ContactFields;
use crate::entities::contacts;
use crate::errors::domain::DomainError;

/// Contacts per page of `list`.
pub const PAGE_SIZE: u64 = 10;

/// Largest offset the SQL drivers bind (signed 64-bit).
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Contact domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl From<contacts::Model> for Contact {
    fn from(model: contacts::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            email: model.email,
        }
    }
}

/// Insert already-validated fields.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: ContactFields,
) -> Result<Contact, DomainError> {
    let model = contacts_adapter::insert(conn, ContactCreate::from(fields)).await?;
    debug!(contact_id = model.id, "contact.inserted");
    Ok(Contact::from(model))
}

/// Validate, then insert. Nothing is written when validation fails.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: ContactFields,
) -> Result<Contact, DomainError> {
    fields.validate()?;
    insert(conn, fields).await
}

pub async fn fetch_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Contact, DomainError> {
    contacts_adapter::find_by_id(conn, id)
        .await?
        .map(Contact::from)
        .ok_or_else(|| DomainError::contact_not_found(id))
}

/// Validate, then overwrite all four fields of contact `id`.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    fields: ContactFields,
) -> Result<Contact, DomainError> {
    fields.validate()?;
    let model = contacts_adapter::update(conn, ContactUpdate::new(id, fields)).await?;
    Ok(Contact::from(model))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    contacts_adapter::delete(conn, id).await?;
    debug!(contact_id = id, "contact.deleted");
    Ok(())
}

/// 1-based page of contacts ordered by id. Page 0 is read as page 1.
///
/// Pages whose offset does not fit the driver's signed range are past any
/// possible end and come back empty without a query.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: u64,
) -> Result<Vec<Contact>, DomainError> {
    let Some(offset) = (page.max(1) - 1)
        .checked_mul(PAGE_SIZE)
        .filter(|offset| *offset <= MAX_OFFSET)
    else {
        debug!(page, "contact.list.page_out_of_range");
        return Ok(Vec::new());
    };
    let models = contacts_adapter::list_page(conn, offset, PAGE_SIZE).await?;
    Ok(models.into_iter().map(Contact::from).collect())
}

/// Contacts with `term` inside any of their four text fields, ordered by id.
pub async fn search<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    term: &str,
) -> Result<Vec<Contact>, DomainError> {
    let models = contacts_adapter::search(conn, term).await?;
    Ok(models.into_iter().map(Contact::from).collect())
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(contacts_adapter::count_by_id(conn, id).await? > 0)
}

/// Whether another contact already uses `email`. `exclude_id` leaves the
/// contact being edited out of the check.
pub async fn exists_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<bool, DomainError> {
    Ok(contacts_adapter::count_by_email(conn, email, exclude_id).await? > 0)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(contacts_adapter::count(conn).await?)
}
