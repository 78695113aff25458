use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::contacts;
use crate::state::app_state::AppState;

/// Path segment naming a contact in every contact route.
pub const CONTACT_ID_PARAM: &str = "contact_id";

/// Path value standing for a contact that has not been saved yet.
pub const NEW_CONTACT_SEGMENT: &str = "new";

fn parse_contact_id(raw: &str) -> Result<i64, AppError> {
    let contact_id = raw.parse::<i64>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidContactId,
            format!("Invalid contact id: {raw}"),
        )
    })?;

    if contact_id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidContactId,
            format!("Contact id must be positive, got: {contact_id}"),
        ));
    }
    Ok(contact_id)
}

fn raw_param(req: &HttpRequest) -> Result<String, AppError> {
    req.match_info()
        .get(CONTACT_ID_PARAM)
        .map(str::to_owned)
        .ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidContactId, "Missing contact_id parameter")
        })
}

async fn ensure_exists(req: &HttpRequest, contact_id: i64) -> Result<(), AppError> {
    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;
    let db = require_db(app_state)?;

    if !contacts::exists(db, contact_id).await? {
        return Err(AppError::not_found(
            ErrorCode::ContactNotFound,
            format!("Contact {contact_id} not found"),
        ));
    }
    Ok(())
}

/// Contact id extracted from the route path parameter.
/// Validates that the contact exists in the database.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ContactId(pub i64);

impl FromRequest for ContactId {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let contact_id = parse_contact_id(&raw_param(&req)?)?;
            ensure_exists(&req, contact_id).await?;
            Ok(ContactId(contact_id))
        })
    }
}

/// Either the `new` placeholder or an existing contact's id.
///
/// Used where a form may be editing an unsaved contact, such as the
/// email availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSlot {
    New,
    Existing(i64),
}

impl ContactSlot {
    /// The id to leave out of uniqueness checks.
    pub fn exclude_id(self) -> Option<i64> {
        match self {
            ContactSlot::New => None,
            ContactSlot::Existing(id) => Some(id),
        }
    }
}

impl FromRequest for ContactSlot {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let raw = raw_param(&req)?;
            if raw == NEW_CONTACT_SEGMENT {
                return Ok(ContactSlot::New);
            }
            let contact_id = parse_contact_id(&raw)?;
            ensure_exists(&req, contact_id).await?;
            Ok(ContactSlot::Existing(contact_id))
        })
    }
}
