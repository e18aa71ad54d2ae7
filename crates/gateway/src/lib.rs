//! `cardapio-gateway` — request validation and dispatch.
//!
//! The folder is structured like:
//! - `request.rs`: inbound shapes, normalization into one internal request
//! - `dispatch.rs`: operation routing (create / update / delete)
//! - `response.rs`: status + JSON body mapping
//! - `error.rs`: gateway error taxonomy and status mapping
//! - `app.rs`: Axum router + binary wiring

pub mod app;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod response;

pub use dispatch::handle;
pub use error::GatewayError;
pub use response::GatewayResponse;
