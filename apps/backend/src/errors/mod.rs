//! Error handling for the contacts backend.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, FieldErrors};
pub use error_code::ErrorCode;

#[cfg(test)]
mod tests_error_mapping;
