//! Gateway error taxonomy.

use thiserror::Error;

use cardapio_core::DomainError;
use cardapio_publisher::PublishError;

/// Outcome classification for a failed invocation.
///
/// - `BadRequest` → 400, message is the specific rule violated.
/// - `Internal` → 500, message is wrapped as a generic internal error with
///   the cause text kept for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Malformed input, unsupported operation, or invalid/missing fields.
    #[error("{0}")]
    BadRequest(String),

    /// Configuration or transport failure; never retried here.
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<DomainError> for GatewayError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<PublishError> for GatewayError {
    fn from(err: PublishError) -> Self {
        Self::Internal(err.to_string())
    }
}
