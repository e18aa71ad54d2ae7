//! `cardapio-events` — integration events published to the work queue.

pub mod envelope;
pub mod event;

pub use envelope::ProductEventEnvelope;
pub use event::ProductEventType;
