use crate::error::{ServerError, ServerResult};
use crate::routes::TextRequest;
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use ::summarize::Summary;

/// Summarize text through the external model.
///
/// The text is forwarded verbatim (no cleaning). Decoding parameters come
/// from configuration (80 max / 20 min tokens, no sampling by default) and
/// the first candidate the model returns is surfaced.
///
/// # Errors
/// - `502 SUMMARIZATION_FAILED` when the model call fails or returns nothing
/// - `503 GATEWAY_UNAVAILABLE` while the circuit breaker is open
///
/// # Example
/// ```json
/// // Request
/// { "text": "The tower is 324 metres tall ..." }
///
/// // Response
/// { "summary": "The tower is 324 metres tall, about the same height as ..." }
/// ```
pub async fn summarize_text(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ServerResult<Json<Summary>> {
    let Json(request) = payload
        .map_err(|e| ServerError::from_json_rejection(e, state.config.max_body_size_mb))?;

    let start = Instant::now();
    let provider = state.summarizer.provider().to_string();

    match state.summarizer.summarize(&request.text).await {
        Ok(summary) => {
            metrics::histogram!("summarize_duration_seconds", "provider" => provider.clone())
                .record(start.elapsed().as_secs_f64());
            tracing::info!(
                provider = %provider,
                input_chars = request.text.chars().count(),
                summary_chars = summary.summary.chars().count(),
                duration_ms = %start.elapsed().as_millis(),
                "summary generated"
            );
            Ok(Json(summary))
        }
        Err(err) => {
            metrics::counter!("summarize_failures_total", "provider" => provider).increment(1);
            Err(err.into())
        }
    }
}
