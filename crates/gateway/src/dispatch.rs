//! Operation routing.
//!
//! Pure per-invocation routing over a normalized request; the only side
//! effect is the single publish call through the injected
//! [`QueuePublisher`]. No state survives an invocation.

use serde_json::Value;
use tracing::{error, info};

use cardapio_core::{ProductId, validate_product};
use cardapio_events::ProductEventEnvelope;
use cardapio_publisher::QueuePublisher;

use crate::error::GatewayError;
use crate::request::{Operation, OperationRequest, normalize};
use crate::response::{GatewayResponse, ResponseData};

/// Handle one raw invocation payload end to end.
///
/// Every failure is logged with context, then mapped uniformly:
/// validation/format errors to 400, anything else to 500.
pub fn handle(publisher: &dyn QueuePublisher, raw: &Value) -> GatewayResponse {
    let request = match normalize(raw) {
        Ok(request) => request,
        Err(err) => {
            error!(%err, "failed to normalize request");
            return err.into();
        }
    };

    info!(operation = ?request.operation, "dispatching product operation");

    let result = match request.operation {
        Operation::Create => handle_create(publisher, &request),
        Operation::Update => handle_update(publisher, &request),
        Operation::Delete => handle_delete(publisher, &request),
    };

    match result {
        Ok(response) => response,
        Err(err) => {
            error!(%err, operation = ?request.operation, "product operation failed");
            err.into()
        }
    }
}

fn handle_create(
    publisher: &dyn QueuePublisher,
    request: &OperationRequest,
) -> Result<GatewayResponse, GatewayError> {
    let record = validate_product(&request.product)?;

    // No identifier on creation; the downstream store mints one.
    let envelope = ProductEventEnvelope::created(record);
    let receipt = publisher.publish(&envelope)?;

    Ok(GatewayResponse::ok(
        "Product creation request sent successfully",
        ResponseData {
            product_id: None,
            queue_message_id: Some(receipt.message_id),
        },
    ))
}

fn handle_update(
    publisher: &dyn QueuePublisher,
    request: &OperationRequest,
) -> Result<GatewayResponse, GatewayError> {
    let product_id = require_product_id(request, "update")?;
    let record = validate_product(&request.product)?;

    let envelope = ProductEventEnvelope::updated(product_id.clone(), record);
    let receipt = publisher.publish(&envelope)?;

    Ok(GatewayResponse::ok(
        "Product update request sent successfully",
        ResponseData {
            product_id: Some(product_id.to_string()),
            queue_message_id: Some(receipt.message_id),
        },
    ))
}

fn handle_delete(
    publisher: &dyn QueuePublisher,
    request: &OperationRequest,
) -> Result<GatewayResponse, GatewayError> {
    // Deletion skips product validation: only the identifier travels.
    let product_id = require_product_id(request, "delete")?;

    let envelope = ProductEventEnvelope::deleted(product_id.clone());
    let receipt = publisher.publish(&envelope)?;

    Ok(GatewayResponse::ok(
        "Product deletion request sent successfully",
        ResponseData {
            product_id: Some(product_id.to_string()),
            queue_message_id: Some(receipt.message_id),
        },
    ))
}

fn require_product_id(
    request: &OperationRequest,
    operation: &str,
) -> Result<ProductId, GatewayError> {
    let raw = request.product_id.as_deref().ok_or_else(|| {
        GatewayError::bad_request(format!("Product ID is required for {operation} operations"))
    })?;
    Ok(ProductId::parse(raw)?)
}
