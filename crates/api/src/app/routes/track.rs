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
    Router::new().route("/:tracking_no", get(get_tracking))
}

pub async fn get_tracking(
    Extension(services): Extension<Arc<AppServices>>,
    Path(tracking_no): Path<String>,
) -> axum::response::Response {
    match services.tracking.get_tracking(&tracking_no).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => errors::lookup_error_to_response(e),
    }
}
