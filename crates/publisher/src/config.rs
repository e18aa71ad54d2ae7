//! Queue configuration from the environment.

/// Default stream key for product events.
const DEFAULT_STREAM_KEY: &str = "cardapio:product-events";

/// Queue endpoint configuration, read once at startup.
///
/// A missing `QUEUE_URL` is deliberately not fatal here: the gateway can
/// still answer validation failures, and the configuration error surfaces
/// on the first publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    /// Queue endpoint (e.g. "redis://localhost:6379"). `None` when unset.
    pub url: Option<String>,
    /// Stream key the envelopes are appended to.
    pub stream_key: String,
}

impl QueueConfig {
    /// Read `QUEUE_URL` and `QUEUE_STREAM_KEY` from the environment.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("QUEUE_URL").ok().filter(|v| !v.is_empty()),
            stream_key: std::env::var("QUEUE_STREAM_KEY")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_STREAM_KEY.to_string()),
        }
    }

    pub fn new(url: impl Into<String>, stream_key: Option<String>) -> Self {
        Self {
            url: Some(url.into()),
            stream_key: stream_key.unwrap_or_else(|| DEFAULT_STREAM_KEY.to_string()),
        }
    }

    /// Config with no endpoint set; publishing fails with a config error.
    pub fn unconfigured() -> Self {
        Self {
            url: None,
            stream_key: DEFAULT_STREAM_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_stream_key() {
        let config = QueueConfig::new("redis://localhost:6379", None);
        assert_eq!(config.url.as_deref(), Some("redis://localhost:6379"));
        assert_eq!(config.stream_key, "cardapio:product-events");
    }

    #[test]
    fn unconfigured_has_no_url() {
        assert!(QueueConfig::unconfigured().url.is_none());
    }
}
