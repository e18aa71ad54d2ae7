//! In-memory publisher for tests/dev.

use std::sync::Mutex;

use cardapio_events::ProductEventEnvelope;

use crate::queue::{PublishError, PublishReceipt, QueuePublisher};

/// Records published envelopes instead of sending them anywhere.
///
/// - No IO
/// - Receipts carry sequential ids ("local-1", "local-2", ...)
/// - Can be armed to fail, for exercising the internal-error path
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    sent: Mutex<Vec<ProductEventEnvelope>>,
    fail_with: Mutex<Option<PublishError>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publisher that fails every publish with `error`.
    pub fn failing(error: PublishError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Mutex::new(Some(error)),
        }
    }

    /// Snapshot of everything published so far.
    pub fn sent(&self) -> Vec<ProductEventEnvelope> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl QueuePublisher for RecordingPublisher {
    fn publish(&self, envelope: &ProductEventEnvelope) -> Result<PublishReceipt, PublishError> {
        let armed = self
            .fail_with
            .lock()
            .map_err(|_| PublishError::Transport("publisher lock poisoned".to_string()))?
            .clone();
        if let Some(err) = armed {
            return Err(err);
        }

        let mut sent = self
            .sent
            .lock()
            .map_err(|_| PublishError::Transport("publisher lock poisoned".to_string()))?;
        sent.push(envelope.clone());
        Ok(PublishReceipt {
            message_id: format!("local-{}", sent.len()),
        })
    }
}
