//! Domain Errors
//!
//! Error types for domain operations. Field validation failures are not
//! errors in this sense: they are recorded on the entity (see
//! [`ObservableEntity::add_error`](crate::domain::ObservableEntity::add_error))
//! and never abort an assignment.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),
}

impl DomainError {
    pub fn invalid_date<T: AsRef<str>>(input: T, format: &str) -> Self {
        Self::InvalidDate(format!("'{}' does not match {}", input.as_ref(), format))
    }
}
