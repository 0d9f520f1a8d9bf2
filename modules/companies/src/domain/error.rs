//! Domain error types for the Companies module.

use thiserror::Error;

/// Domain-level errors for the Companies module.
///
/// Data-file problems never show up here: loaders recover from them and log.
#[derive(Error, Debug)]
pub enum DomainError {
    /// No company carries the requested identifier.
    #[error("Company not found: {0}")]
    NotFound(String),

    /// An unexpected failure while assembling the response.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Creates an `Internal` error from a message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(anyhow::anyhow!(message.into()))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
