//! `cardapio-publisher` — queue transport for product event envelopes.
//!
//! The gateway treats the queue as an external collaborator: one publish
//! attempt per invocation, no retry, no delivery guarantee beyond the
//! transport's acknowledgment.

pub mod config;
pub mod in_memory;
pub mod queue;
pub mod redis_streams;

pub use config::QueueConfig;
pub use in_memory::RecordingPublisher;
pub use queue::{PublishError, PublishReceipt, QueuePublisher};
pub use redis_streams::RedisStreamsPublisher;
