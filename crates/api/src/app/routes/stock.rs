use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/:item_id", get(get_stock))
}

pub async fn get_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(item_id): Path<String>,
) -> axum::response::Response {
    match services.stock.get_stock(&item_id).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => errors::lookup_error_to_response(e),
    }
}
