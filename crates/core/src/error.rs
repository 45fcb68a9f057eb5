//! Domain error model.

use thiserror::Error;

/// Result type used across the domain crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, client-side failures (form
/// validation, identifier parsing). Transport failures live in the client
/// crate's error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a required form field left empty).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Validation error for a required field that was left empty.
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("El campo {field} es requerido"))
    }
}
