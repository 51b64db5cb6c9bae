use thiserror::Error;

/// Errors surfaced by a [`Summarizer`](crate::Summarizer).
///
/// A failed call never degrades into an empty summary; every failure mode of
/// the remote model maps to one of these variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SummarizeError {
    /// Configuration is unusable (bad URL, client construction failed).
    #[error("invalid summarizer config: {0}")]
    InvalidConfig(String),
    /// Decoding parameters are inconsistent.
    #[error("invalid decoding parameters: {0}")]
    InvalidParams(String),
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The model endpoint answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    /// The response body could not be understood.
    #[error("invalid response from model: {0}")]
    InvalidResponse(String),
    /// The model returned no candidates.
    #[error("model returned no summary candidates")]
    EmptyResponse,
    /// The circuit breaker is open; the call was not attempted.
    #[error("circuit breaker open for '{0}', model temporarily unavailable")]
    CircuitOpen(String),
}

impl SummarizeError {
    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SummarizeError::Transport(_) => true,
            SummarizeError::Upstream { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SummarizeError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            SummarizeError::InvalidConfig(err.to_string())
        } else {
            SummarizeError::Transport(err.to_string())
        }
    }
}
