//! Redis Streams-backed queue publisher.
//!
//! Envelopes are appended to a single stream (XADD) as a JSON `payload`
//! field. The stream entry id returned by Redis serves as the
//! transport-assigned message id in the acknowledgment. Consumption
//! (consumer groups, redelivery, dead-lettering) belongs to the downstream
//! consumer and is out of scope here.

use tracing::{debug, info};

use cardapio_events::ProductEventEnvelope;

use crate::config::QueueConfig;
use crate::queue::{PublishError, PublishReceipt, QueuePublisher};

#[derive(Debug, Clone)]
pub struct RedisStreamsPublisher {
    config: QueueConfig,
}

impl RedisStreamsPublisher {
    /// Construction never touches the network; a missing endpoint only
    /// fails once `publish` is called.
    pub fn new(config: QueueConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(QueueConfig::from_env())
    }

    pub fn stream_key(&self) -> &str {
        &self.config.stream_key
    }
}

impl QueuePublisher for RedisStreamsPublisher {
    fn publish(&self, envelope: &ProductEventEnvelope) -> Result<PublishReceipt, PublishError> {
        let url = self.config.url.as_deref().ok_or_else(|| {
            PublishError::Config("QUEUE_URL environment variable is not set".to_string())
        })?;

        let body = serde_json::to_string(envelope)
            .map_err(|e| PublishError::Serialize(e.to_string()))?;

        info!(stream_key = %self.config.stream_key, "sending envelope to queue");
        debug!(%body, "envelope content");

        let client = redis::Client::open(url)
            .map_err(|e| PublishError::Transport(e.to_string()))?;
        let mut conn = client
            .get_connection()
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        // Single attempt; any failure is surfaced to the caller unretried.
        let entry_id: String = redis::cmd("XADD")
            .arg(&self.config.stream_key)
            .arg("*")
            .arg("payload")
            .arg(&body)
            .query(&mut conn)
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        info!(message_id = %entry_id, "envelope sent successfully");
        Ok(PublishReceipt {
            message_id: entry_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardapio_core::{Category, ProductRecord};

    fn sample_envelope() -> ProductEventEnvelope {
        ProductEventEnvelope::created(ProductRecord {
            name: "Burger X".to_string(),
            category: Category::Lanche,
            description: "Tasty burger meal".to_string(),
            price: 19.9,
            cooking_time: 10.0,
        })
    }

    #[test]
    fn unconfigured_endpoint_fails_before_any_network_call() {
        let publisher = RedisStreamsPublisher::new(QueueConfig::unconfigured());
        let err = publisher.publish(&sample_envelope()).unwrap_err();
        match err {
            PublishError::Config(msg) => assert!(msg.contains("QUEUE_URL")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_endpoint_is_a_transport_error() {
        let publisher =
            RedisStreamsPublisher::new(QueueConfig::new("not-a-redis-url", None));
        let err = publisher.publish(&sample_envelope()).unwrap_err();
        assert!(matches!(err, PublishError::Transport(_)));
    }
}
