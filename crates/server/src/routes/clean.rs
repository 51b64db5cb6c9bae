use crate::error::{ServerError, ServerResult};
use crate::routes::TextRequest;
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use normalize::NormalizedText;
use std::sync::Arc;

/// Clean free text with the allow-list normalizer.
///
/// Strips every character outside ASCII letters/digits, the Latin-1 accented
/// range, space and `.,!?`, then collapses spaces. Never fails for a
/// well-formed request.
///
/// # Example
/// ```json
/// // Request
/// { "text": "Price: $100 (tax incl.)" }
///
/// // Response
/// { "original": "Price: $100 (tax incl.)", "cleaned": "Price 100 tax incl." }
/// ```
pub async fn clean_text(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ServerResult<Json<NormalizedText>> {
    let Json(request) = payload
        .map_err(|e| ServerError::from_json_rejection(e, state.config.max_body_size_mb))?;

    let result = NormalizedText::new(request.text);

    tracing::debug!(
        original_chars = result.original.chars().count(),
        removed_chars = result.removed_chars(),
        "text cleaned"
    );

    Ok(Json(result))
}
