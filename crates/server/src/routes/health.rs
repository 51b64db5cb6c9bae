use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use summarize::CircuitState;

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "ai-core",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
    }))
}

/// Readiness check endpoint
///
/// Cleaning is always available; summarization is reported unavailable
/// (503) while the gateway circuit breaker is open.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> Response {
    let circuit = state.summarizer.circuit_state();
    let ready = circuit != CircuitState::Open;

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = Json(json!({
        "status": if ready { "ready" } else { "degraded" },
        "service": "ai-core",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": state.uptime_seconds(),
        "components": {
            "normalizer": "ready",
            "summarizer": {
                "provider": state.summarizer.provider(),
                "circuit": circuit.as_str(),
            },
        }
    }));

    (status, body).into_response()
}

/// Prometheus metrics endpoint
///
/// Renders the text exposition format when a recorder is installed,
/// otherwise falls back to a small JSON body.
pub async fn metrics(State(state): State<Arc<ServerState>>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => Json(json!({
            "uptime_seconds": state.uptime_seconds(),
        }))
        .into_response(),
    }
}

/// Server metadata endpoint
pub async fn server_metadata(State(state): State<Arc<ServerState>>) -> Json<ServerMetadata> {
    Json(ServerMetadata {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        summarizer_provider: state.summarizer.provider().to_string(),
        summarizer_model: state.config.summarizer.model_name.clone(),
        decoding: state.config.summarizer.decoding,
    })
}
