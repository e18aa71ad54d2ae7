//! Queue publishing abstraction.

use std::sync::Arc;

use thiserror::Error;

use cardapio_events::ProductEventEnvelope;

/// Acknowledgment returned by the queue transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Message identifier assigned by the transport (not the envelope's
    /// own `messageId`).
    pub message_id: String,
}

/// Failure while publishing an envelope.
///
/// None of these are retried internally; the caller surfaces them as an
/// internal error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// No queue endpoint configured. Checked before any network call.
    #[error("{0}")]
    Config(String),

    /// Envelope could not be encoded to the wire format.
    #[error("failed to serialize envelope: {0}")]
    Serialize(String),

    /// The submission call failed (connect, auth, throttling, timeout).
    #[error("queue submission failed: {0}")]
    Transport(String),
}

/// Hands envelopes to an external message queue.
///
/// Implementations hold read-only configuration only, so a single handle is
/// safe to share across concurrent invocations. The trait is object-safe;
/// the gateway holds it as `Arc<dyn QueuePublisher>` so tests can
/// substitute [`crate::RecordingPublisher`].
pub trait QueuePublisher: Send + Sync {
    /// Serialize `envelope` and submit it to the queue, returning the
    /// transport-assigned message id. At-most-once: a failure is not
    /// retried.
    fn publish(&self, envelope: &ProductEventEnvelope) -> Result<PublishReceipt, PublishError>;
}

impl<P> QueuePublisher for Arc<P>
where
    P: QueuePublisher + ?Sized,
{
    fn publish(&self, envelope: &ProductEventEnvelope) -> Result<PublishReceipt, PublishError> {
        (**self).publish(envelope)
    }
}
