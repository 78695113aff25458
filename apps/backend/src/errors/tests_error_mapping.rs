// Unit tests for DomainError -> AppError mapping, no HTTP server or database involved
use crate::errors::domain::{ConflictKind, DomainError, FieldErrors, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_field_errors_to_400() {
    let mut errors = FieldErrors::new();
    errors.insert("email", "Email is required.");
    let app: AppError = DomainError::InvalidFields(errors).into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
    assert!(matches!(app, AppError::InvalidFields { .. }));
}

#[test]
fn maps_plain_validation_to_400() {
    let app: AppError = DomainError::validation("bad input").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_conflicts() {
    let dup = DomainError::conflict(ConflictKind::DuplicateEmail, "Email Must Be Unique");
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "DUPLICATE_EMAIL");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::contact_not_found(42).into();
    assert_eq!(app.code().as_str(), "CONTACT_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert!(app.to_string().contains("Contact 42 not found"));

    let app: AppError = DomainError::not_found(NotFoundKind::Other("Record".into()), "gone").into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad row").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "boom").into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}
