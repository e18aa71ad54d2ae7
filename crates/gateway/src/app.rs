//! Axum router + HTTP mapping (public entrypoint used by `main.rs`).

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;

use cardapio_publisher::QueuePublisher;

use crate::dispatch;
use crate::response::GatewayResponse;

/// Build the HTTP router around an injected publisher handle.
pub fn build_app(publisher: Arc<dyn QueuePublisher>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/products/operations", post(handle_operation))
        .layer(Extension(publisher))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

async fn handle_operation(
    Extension(publisher): Extension<Arc<dyn QueuePublisher>>,
    Json(raw): Json<Value>,
) -> axum::response::Response {
    // The publish call blocks on the queue transport; keep it off the
    // async runtime's worker threads.
    let response =
        match tokio::task::spawn_blocking(move || dispatch::handle(publisher.as_ref(), &raw))
            .await
        {
            Ok(response) => response,
            Err(err) => GatewayResponse::internal_error(format!("handler task failed: {err}")),
        };

    into_http(response)
}

fn into_http(response: GatewayResponse) -> axum::response::Response {
    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
