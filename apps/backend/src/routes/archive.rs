//! Simulated archive export job.
//!
//! Every read of `/contacts/archive` advances the job one step once it
//! exists; clients poll it to drive the progress bar.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::archive::{ArchiveJob, ArchiveStatus, Archiver, OwnerId};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// JSON view of the archive job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveView {
    pub status: ArchiveStatus,
    pub progress_units: u8,
    pub fraction: f64,
    pub owner_id: OwnerId,
    pub artifact: &'static str,
}

impl ArchiveView {
    fn new(job: &ArchiveJob, archiver: &Archiver) -> Self {
        Self {
            status: job.status(),
            progress_units: job.progress_units(),
            fraction: job.fraction(),
            owner_id: job.owner_id().clone(),
            artifact: archiver.export_artifact_name(),
        }
    }
}

/// Stand-in body for the downloadable archive; no export is produced.
const PLACEHOLDER_ARCHIVE: &str = r#"{"archive":"placeholder","contacts":[]}"#;

/// `?owner=` names the requester; it only sticks when the poll creates the job.
#[derive(Debug, Default, Deserialize)]
pub struct ArchiveQuery {
    #[serde(default)]
    pub owner: Option<String>,
}

impl ArchiveQuery {
    fn owner_id(self) -> OwnerId {
        match self.owner {
            Some(owner) if !owner.trim().is_empty() => OwnerId::new(owner),
            _ => OwnerId::default(),
        }
    }
}

async fn poll_archive(
    query: web::Query<ArchiveQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let archiver = app_state.archiver();
    let job = archiver.get_or_advance_as(query.into_inner().owner_id());
    info!(
        status = %job.status(),
        progress_units = job.progress_units(),
        "archive.poll"
    );
    Ok(HttpResponse::Ok().json(ArchiveView::new(&job, archiver)))
}

async fn reset_archive(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let archiver = app_state.archiver();
    // Reading the job advances it; the reset below wins either way
    let job = archiver.get_or_advance();
    archiver.reset();
    let job = archiver.peek().unwrap_or(job);
    info!(status = %job.status(), "archive.reset");
    Ok(HttpResponse::Ok().json(ArchiveView::new(&job, archiver)))
}

async fn archive_file(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let filename = app_state.archiver().export_artifact_name();
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename.to_string())],
        })
        .body(PLACEHOLDER_ARCHIVE))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/archive")
            .route(web::get().to(poll_archive))
            .route(web::post().to(poll_archive))
            .route(web::delete().to(reset_archive)),
    )
    .service(web::resource("/archive/file").route(web::get().to(archive_file)));
}
