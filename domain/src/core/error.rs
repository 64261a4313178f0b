//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid type code: {0}")]
    InvalidCode(String),
}

impl DomainError {
    /// Check if this error was caused by a malformed answer sequence
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}
