use actix_web::{error, web, HttpRequest};
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod api_contacts;
pub mod archive;
pub mod contacts;
pub mod health;

/// Query-string failures become INVALID_QUERY problem details.
fn query_error_handler(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "query.rejected");
    AppError::bad_request(ErrorCode::InvalidQuery, format!("Invalid query string: {err}")).into()
}

/// Register every route. `main.rs` and the integration tests share this, so
/// both see the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health check: /health
    cfg.configure(health::configure_routes);

    // Archive job and form checks: /contacts/**
    cfg.service(
        web::scope("/contacts")
            .configure(archive::configure_routes)
            .configure(contacts::configure_routes),
    );

    // JSON API: /api/v1/contacts/**
    cfg.service(web::scope("/api/v1/contacts").configure(api_contacts::configure_routes));
}
