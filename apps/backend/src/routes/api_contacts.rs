//! JSON contact API under `/api/v1/contacts`.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::contact::ContactFields;
use crate::error::AppError;
use crate::extractors::contact_id::ContactId;
use crate::extractors::validated_json::ValidatedJson;
use crate::repos::contacts::{self, Contact};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
struct ContactList {
    contacts: Vec<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u64>,
}

/// GET /api/v1/contacts?page=N or ?q=term
async fn list_contacts(
    query: web::Query<ListQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let ListQuery { page, q } = query.into_inner();

    let body = match q {
        Some(term) => ContactList {
            contacts: contacts::search(db, &term).await?,
            page: None,
        },
        None => {
            let page = page.unwrap_or(1).max(1);
            ContactList {
                contacts: contacts::list(db, page).await?,
                page: Some(page),
            }
        }
    };

    Ok(HttpResponse::Ok().json(body))
}

async fn create_contact(
    body: ValidatedJson<ContactFields>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let fields = body.into_inner();
    let contact = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(contacts::create(txn, fields).await?) })
    })
    .await?;

    Ok(HttpResponse::Created().json(contact))
}

async fn get_contact(
    contact_id: ContactId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let contact = contacts::fetch_by_id(db, contact_id.0).await?;
    Ok(HttpResponse::Ok().json(contact))
}

async fn update_contact(
    contact_id: ContactId,
    body: ValidatedJson<ContactFields>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ContactId(id) = contact_id;
    let fields = body.into_inner();
    let contact = with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(contacts::update(txn, id, fields).await?) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(contact))
}

async fn delete_contact(
    contact_id: ContactId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ContactId(id) = contact_id;
    with_txn(&app_state, move |txn| {
        Box::pin(async move { Ok(contacts::delete(txn, id).await?) })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_contacts))
            .route(web::post().to(create_contact)),
    )
    .service(
        web::resource("/{contact_id}")
            .route(web::get().to(get_contact))
            .route(web::put().to(update_contact))
            .route(web::delete().to(delete_contact)),
    );
}
