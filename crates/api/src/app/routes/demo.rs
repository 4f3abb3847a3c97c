use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route(
            "/function/:plugin_name/:function_name",
            get(invoke_function),
        )
        .route("/chat", post(chat))
        .route("/health", get(health))
        .route("/info", get(info))
}

/// Direct function invocation.
///
/// Unknown plugin/function come back as a 200 with the router's text result;
/// the demo surface never turns those into HTTP errors.
pub async fn invoke_function(
    Extension(services): Extension<Arc<AppServices>>,
    Path((plugin_name, function_name)): Path<(String, String)>,
    Query(params): Query<dto::FunctionParams>,
) -> axum::response::Response {
    let result = services
        .functions
        .invoke(&plugin_name, &function_name, &params.parameter);

    (
        StatusCode::OK,
        Json(json!({
            "plugin": plugin_name,
            "function": function_name,
            "parameter": params.parameter,
            "result": result,
        })),
    )
        .into_response()
}

pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    let message = body.message.unwrap_or_default();
    if message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Message is required" })),
        )
            .into_response();
    }

    let ai_response = services.chat.chat(&message).await;

    (
        StatusCode::OK,
        Json(json!({
            "userMessage": message,
            "aiResponse": ai_response,
        })),
    )
        .into_response()
}

pub async fn health() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "status": "UP",
            "message": "Storefront demo is running",
        })),
    )
        .into_response()
}

/// Capability listing built from the router's registered function table.
pub async fn info(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let mut plugins = serde_json::Map::new();
    for (plugin, functions) in services.functions.catalog() {
        plugins.insert(plugin.to_string(), json!(functions));
    }

    (
        StatusCode::OK,
        Json(json!({
            "description": "Storefront plugin-function demo",
            "plugins": plugins,
            "endpoints": {
                "invokeFunction": "GET /api/demo/function/{pluginName}/{functionName}?parameter={value}",
                "chat": "POST /api/demo/chat with body: {\"message\": \"your question\"}",
                "health": "GET /api/demo/health",
                "info": "GET /api/demo/info",
            },
        })),
    )
        .into_response()
}
