//! Error codes for the contacts API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// One or more contact fields were rejected
    ValidationError,
    /// Malformed request body
    BadRequest,
    /// Malformed query string
    InvalidQuery,
    /// Contact id path segment is not a positive integer
    InvalidContactId,

    // Resource not found
    ContactNotFound,
    NotFound,

    // Conflicts
    /// Email already belongs to another contact
    DuplicateEmail,
    Conflict,

    // System errors
    DbError,
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::InvalidContactId => "INVALID_CONTACT_ID",
            Self::ContactNotFound => "CONTACT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every variant, for exhaustiveness checks in tests.
    pub const ALL: [ErrorCode; 14] = [
        Self::ValidationError,
        Self::BadRequest,
        Self::InvalidQuery,
        Self::InvalidContactId,
        Self::ContactNotFound,
        Self::NotFound,
        Self::DuplicateEmail,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::DataCorruption,
        Self::InternalError,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
