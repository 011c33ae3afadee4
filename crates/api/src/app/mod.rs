//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: service wiring over the injected document store
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use pressroom_infra::DocumentStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests, which inject a seeded store).
pub fn build_app(jwt_secret: String, store: Arc<dyn DocumentStore>) -> Router {
    let jwt = Arc::new(pressroom_auth::Hs256JwtValidator::new(
        jwt_secret.into_bytes(),
    ));
    let auth_state = middleware::AuthState { jwt };

    let services = Arc::new(services::build_services(store));

    // Protected routes: valid session required (enforced here, consumed
    // nowhere — the lineage subsystem makes no permission decisions).
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
}
