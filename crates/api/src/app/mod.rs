//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store selection and lookup-service wiring
//! - `routes/`: HTTP routes + handlers (one file per surface area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: the single lookup-error-to-status translation point

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);
    app_with_services(services)
}

/// Router over pre-built services (tests wire their own).
pub fn app_with_services(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .nest("/v1", routes::catalog_router())
        .nest("/api/demo", routes::demo_router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
