//! Request DTOs.
//!
//! Response DTOs live with the lookup services (`storefront-catalog`,
//! `storefront-tracking`); the demo surface responds with ad-hoc JSON.

use serde::Deserialize;

/// Query for `GET /api/demo/function/{plugin}/{function}`.
#[derive(Debug, Deserialize)]
pub struct FunctionParams {
    pub parameter: String,
}

/// Body for `POST /api/demo/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}
