//! Unified error type for the domain layer.

use thiserror::Error;

/// Errors raised by domain operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Structural validation failed; carries every violation found.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl DomainError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    /// The individual violation messages, in discovery order.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Validation(errors) => errors,
        }
    }
}
