use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::require_db;
use crate::domain::contact::require_email;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::contact_id::ContactSlot;
use crate::logging::pii::Redacted;
use crate::repos::contacts;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct CountResponse {
    count: u64,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
struct EmailAvailability {
    email: String,
    available: bool,
}

async fn count(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let count = contacts::count(db).await?;
    Ok(HttpResponse::Ok().json(CountResponse { count }))
}

/// GET /contacts/{contact_id}/email?email=..
///
/// Checks whether `email` is free for the contact being edited, or for a new
/// contact when the id segment is `new`. Advisory only: the store does not
/// enforce uniqueness, so a write may still race past this check.
async fn check_email(
    slot: ContactSlot,
    query: web::Query<EmailQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let EmailQuery { email } = query.into_inner();
    require_email(&email)?;

    let db = require_db(&app_state)?;
    let taken = contacts::exists_by_email(db, &email, slot.exclude_id()).await?;
    debug!(email = %Redacted(&email), ?slot, taken, "contact.email_check");

    if taken {
        return Err(AppError::conflict(
            ErrorCode::DuplicateEmail,
            "Email Must Be Unique",
        ));
    }

    Ok(HttpResponse::Ok().json(EmailAvailability {
        email,
        available: true,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/count", web::get().to(count))
        .route("/{contact_id}/email", web::get().to(check_email));
}
