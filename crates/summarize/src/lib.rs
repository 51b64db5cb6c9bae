//! Boundary to the external abstractive summarization model.
//!
//! The model itself (tokenizer, weights, beam search) is not part of this
//! workspace. This crate owns the narrow contract the service needs: hand raw
//! text plus [`DecodingParams`] to the model, get back the first generated
//! candidate as a [`Summary`], or a [`SummarizeError`] that says why not.
//!
//! - [`Summarizer`] is the seam the HTTP layer depends on.
//! - [`HttpSummarizer`] implements it against a hosted inference endpoint
//!   (Hugging Face inference API by default, or a plain JSON sidecar), with
//!   retry and a circuit breaker in front of the network call.
//!
//! Text is forwarded exactly as received. Callers that want cleaned input
//! must clean it themselves.
//!
//! ```no_run
//! use summarize::{HttpSummarizer, Summarizer, SummarizerConfig};
//!
//! # async fn run() -> Result<(), summarize::SummarizeError> {
//! let client = HttpSummarizer::new(SummarizerConfig::default())?;
//! let summary = client.summarize("A long article ...").await?;
//! println!("{}", summary.summary);
//! # Ok(())
//! # }
//! ```

mod api;
pub mod circuit_breaker;
mod config;
mod error;
pub mod retry;
mod serde_millis;
mod types;

use async_trait::async_trait;

pub use crate::api::HttpSummarizer;
pub use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use crate::config::{SummarizerConfig, DEFAULT_API_URL, DEFAULT_MODEL_NAME};
pub use crate::error::SummarizeError;
pub use crate::retry::RetryConfig;
pub use crate::types::{DecodingParams, Summary};

/// Produces an abstractive summary of raw text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `text` as-is and returns the first candidate.
    async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError>;

    /// Short provider label for logs.
    fn provider(&self) -> &str;

    /// Health of the upstream as seen by this client.
    fn circuit_state(&self) -> CircuitState {
        CircuitState::Closed
    }
}
