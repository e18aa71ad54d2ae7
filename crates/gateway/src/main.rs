use std::sync::Arc;

use cardapio_publisher::{QueuePublisher, RedisStreamsPublisher};

#[tokio::main]
async fn main() {
    cardapio_observability::init();

    // Queue config is read once here; a missing QUEUE_URL surfaces on the
    // first publish attempt, not at startup.
    let publisher: Arc<dyn QueuePublisher> = Arc::new(RedisStreamsPublisher::from_env());
    let app = cardapio_gateway::app::build_app(publisher);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
