use std::sync::Arc;

use pressroom_infra::InMemoryDocumentStore;

#[tokio::main]
async fn main() {
    pressroom_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    // Dev store until a real read-model backend is wired behind
    // `DocumentStore`.
    let store = Arc::new(InMemoryDocumentStore::new());

    let app = pressroom_api::app::build_app(jwt_secret, store);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
