use axum::{Router, routing::get};

pub mod system;
pub mod timeline;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/order-timeline", timeline::router())
}
