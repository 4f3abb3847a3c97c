use axum::Router;

pub mod demo;
pub mod items;
pub mod stock;
pub mod track;

/// Router for the read-only catalog surface (`/v1/...`).
pub fn catalog_router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .nest("/stock", stock::router())
        .nest("/track", track::router())
}

/// Router for the plugin-function demo surface (`/api/demo/...`).
pub fn demo_router() -> Router {
    demo::router()
}
