//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl DomainError {
    /// Shorthand for a shape mismatch at `path`
    pub fn malformed(path: impl AsRef<str>, expected: &str) -> Self {
        DomainError::MalformedResponse(format!("{} must be {}", path.as_ref(), expected))
    }
}
