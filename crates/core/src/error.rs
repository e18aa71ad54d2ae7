//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic request-validation failures. The
/// `Display` text is the consumer-facing message, so each variant carries
/// the specific rule that was violated. Infrastructure concerns (queue
/// config, transport) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent from the request payload.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field was present but failed a value constraint.
    #[error("{0}")]
    InvalidField(String),

    /// An identifier did not match the downstream store's key format.
    #[error("{0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
