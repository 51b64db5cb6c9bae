//! API route handlers
//!
//! - `health`: liveness, readiness, and metrics
//! - `clean`: text normalization
//! - `summarize`: abstractive summarization through the model gateway

pub mod clean;
pub mod health;
pub mod summarize;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

/// Request body shared by `/clean` and `/summarize`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    /// Raw input text. `rawText` is accepted for older clients.
    #[serde(alias = "rawText")]
    pub text: String,
}

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "ai-core",
///   "version": "0.1.0",
///   "api_version": "v1",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "ai-core",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/clean",
            "/summarize",
            "/api/v1/clean",
            "/api/v1/summarize",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
